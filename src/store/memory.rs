//! In-process storage with the same semantics as the PostgreSQL tables.
//! Backs the test suite and runs the site when no database is configured.

use super::Storage;
use crate::error::AppError;
use crate::models::{
    FaqRecord, GalleryItemRecord, InquiryRecord, NewFaq, NewGalleryItem, NewInquiry,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    inquiries: Vec<InquiryRecord>,
    faqs: Vec<FaqRecord>,
    gallery_items: Vec<GalleryItemRecord>,
    /// Mirrors the `"order" SERIAL` default: advances only when an insert omits `order`.
    faq_order_seq: i32,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("storage lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("storage lock poisoned".into()))
    }
}

/// Next serial id for an append-only table.
fn next_id(len: usize) -> Result<i32, AppError> {
    i32::try_from(len + 1).map_err(|_| AppError::Internal("id sequence exhausted".into()))
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_inquiry(&self, new: NewInquiry) -> Result<InquiryRecord, AppError> {
        let mut t = self.write()?;
        let row = InquiryRecord {
            id: next_id(t.inquiries.len())?,
            name: new.name,
            email: new.email,
            message: new.message,
            created_at: Utc::now(),
        };
        t.inquiries.push(row.clone());
        Ok(row)
    }

    async fn get_faqs(&self) -> Result<Vec<FaqRecord>, AppError> {
        let mut rows = self.read()?.faqs.clone();
        rows.sort_by_key(|f| (f.order, f.id));
        Ok(rows)
    }

    async fn create_faq(&self, new: NewFaq) -> Result<FaqRecord, AppError> {
        let mut t = self.write()?;
        let order = match new.order {
            Some(o) => o,
            None => {
                t.faq_order_seq += 1;
                t.faq_order_seq
            }
        };
        let row = FaqRecord {
            id: next_id(t.faqs.len())?,
            question: new.question,
            answer: new.answer,
            order,
        };
        t.faqs.push(row.clone());
        Ok(row)
    }

    async fn get_gallery_items(&self) -> Result<Vec<GalleryItemRecord>, AppError> {
        Ok(self.read()?.gallery_items.clone())
    }

    async fn create_gallery_item(&self, new: NewGalleryItem) -> Result<GalleryItemRecord, AppError> {
        let mut t = self.write()?;
        let row = GalleryItemRecord {
            id: next_id(t.gallery_items.len())?,
            title: new.title,
            image_url: new.image_url,
            category: new.category,
            created_at: Utc::now(),
        };
        t.gallery_items.push(row.clone());
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
