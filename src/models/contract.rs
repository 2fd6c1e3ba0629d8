//! Wire contract: JSON bodies exchanged with clients, one schema per shape.

use crate::models::records::{
    FaqRecord, GalleryItemRecord, InquiryRecord, NewFaq, NewGalleryItem, NewInquiry,
};
use crate::service::validation::{EntitySchema, Validated, ValidationRule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact-form submission as returned by `POST /api/inquiries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Fields a client may supply for a new inquiry. `id` and `createdAt` are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertFaq {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertGalleryItem {
    pub title: String,
    pub image_url: String,
    pub category: String,
}

impl Validated for Inquiry {
    const SCHEMA: EntitySchema = EntitySchema {
        entity: "inquiry",
        rules: &[
            ValidationRule::id(),
            ValidationRule::text("name"),
            ValidationRule::text("email"),
            ValidationRule::text("message"),
            ValidationRule::timestamp("createdAt"),
        ],
    };
}

impl Validated for InsertInquiry {
    const SCHEMA: EntitySchema = EntitySchema {
        entity: "inquiry",
        rules: &[
            ValidationRule::text("name"),
            ValidationRule::text("email"),
            ValidationRule::text("message"),
        ],
    };
}

impl Validated for Faq {
    const SCHEMA: EntitySchema = EntitySchema {
        entity: "faq",
        rules: &[
            ValidationRule::id(),
            ValidationRule::text("question"),
            ValidationRule::text("answer"),
            ValidationRule::integer("order"),
        ],
    };
}

impl Validated for InsertFaq {
    const SCHEMA: EntitySchema = EntitySchema {
        entity: "faq",
        rules: &[
            ValidationRule::text("question"),
            ValidationRule::text("answer"),
            ValidationRule::integer("order").optional(),
        ],
    };
}

impl Validated for GalleryItem {
    const SCHEMA: EntitySchema = EntitySchema {
        entity: "gallery item",
        rules: &[
            ValidationRule::id(),
            ValidationRule::text("title"),
            ValidationRule::url("imageUrl"),
            ValidationRule::text("category"),
            ValidationRule::timestamp("createdAt"),
        ],
    };
}

impl Validated for InsertGalleryItem {
    const SCHEMA: EntitySchema = EntitySchema {
        entity: "gallery item",
        rules: &[
            ValidationRule::text("title"),
            ValidationRule::url("imageUrl"),
            ValidationRule::text("category"),
        ],
    };
}

impl From<InquiryRecord> for Inquiry {
    fn from(r: InquiryRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            message: r.message,
            created_at: r.created_at,
        }
    }
}

impl From<InsertInquiry> for NewInquiry {
    fn from(i: InsertInquiry) -> Self {
        Self {
            name: i.name,
            email: i.email,
            message: i.message,
        }
    }
}

impl From<FaqRecord> for Faq {
    fn from(r: FaqRecord) -> Self {
        Self {
            id: r.id,
            question: r.question,
            answer: r.answer,
            order: r.order,
        }
    }
}

impl From<InsertFaq> for NewFaq {
    fn from(i: InsertFaq) -> Self {
        Self {
            question: i.question,
            answer: i.answer,
            order: i.order,
        }
    }
}

impl From<GalleryItemRecord> for GalleryItem {
    fn from(r: GalleryItemRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            image_url: r.image_url,
            category: r.category,
            created_at: r.created_at,
        }
    }
}

impl From<InsertGalleryItem> for NewGalleryItem {
    fn from(i: InsertGalleryItem) -> Self {
        Self {
            title: i.title,
            image_url: i.image_url,
            category: i.category,
        }
    }
}
