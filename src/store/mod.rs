//! Persistence: the `Storage` seam plus its PostgreSQL and in-memory implementations.

mod memory;
mod postgres;

pub use memory::MemStorage;
pub use postgres::{ensure_database_exists, PgStorage};

use crate::error::AppError;
use crate::models::{
    FaqRecord, GalleryItemRecord, InquiryRecord, NewFaq, NewGalleryItem, NewInquiry,
};
use async_trait::async_trait;

/// Record store for the three site resources. Records are append-only.
///
/// Failures surface as `AppError` (`Db` for PostgreSQL, `Internal` otherwise) and are
/// never retried here.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Insert an inquiry; `id` and `created_at` are assigned by the store.
    async fn create_inquiry(&self, new: NewInquiry) -> Result<InquiryRecord, AppError>;

    /// All FAQs, ascending by `order` (ties by `id`).
    async fn get_faqs(&self) -> Result<Vec<FaqRecord>, AppError>;

    async fn create_faq(&self, new: NewFaq) -> Result<FaqRecord, AppError>;

    /// All gallery items in insertion order.
    async fn get_gallery_items(&self) -> Result<Vec<GalleryItemRecord>, AppError>;

    async fn create_gallery_item(&self, new: NewGalleryItem) -> Result<GalleryItemRecord, AppError>;

    /// Connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
