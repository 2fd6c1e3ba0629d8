//! Public site API. Paths are shared with `client::SiteClient`.

use crate::handlers::{create_inquiry, list_faqs, list_gallery};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub const INQUIRIES_PATH: &str = "/api/inquiries";
pub const FAQS_PATH: &str = "/api/faqs";
pub const GALLERY_PATH: &str = "/api/gallery";

/// FAQ and gallery creation stay administrative (seeding and `Storage`); only
/// inquiries accept public writes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(INQUIRIES_PATH, post(create_inquiry))
        .route(FAQS_PATH, get(list_faqs))
        .route(GALLERY_PATH, get(list_gallery))
        .with_state(state)
}
