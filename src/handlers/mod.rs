//! HTTP handlers for the public site API.

pub mod faq;
pub mod gallery;
pub mod inquiry;
pub use faq::list_faqs;
pub use gallery::list_gallery;
pub use inquiry::create_inquiry;

use crate::error::AppError;
use axum::http::Uri;

/// Router fallback: unknown paths answer 404 `{message}`.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
