//! Entity shapes, split into two layers:
//! - `records`: rows as stored (snake_case columns, `sqlx::FromRow`)
//! - `contract`: request/response bodies on the wire (camelCase) and their schemas
//!
//! The `From` impls in `contract` are the only bridge between them.

pub mod contract;
pub mod records;

pub use contract::{Faq, GalleryItem, Inquiry, InsertFaq, InsertGalleryItem, InsertInquiry};
pub use records::{FaqRecord, GalleryItemRecord, InquiryRecord, NewFaq, NewGalleryItem, NewInquiry};
