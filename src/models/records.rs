//! Storage-side row types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct InquiryRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FaqRecord {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub order: i32,
}

/// `order: None` takes the next value of the store's order sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct GalleryItemRecord {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGalleryItem {
    pub title: String,
    pub image_url: String,
    pub category: String,
}
