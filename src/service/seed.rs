//! Default site content, inserted into empty tables at startup.

use crate::error::AppError;
use crate::models::{NewFaq, NewGalleryItem};
use crate::store::Storage;
use std::sync::Arc;
use tokio::task::JoinHandle;

const DEFAULT_FAQS: [(&str, &str); 3] = [
    (
        "What does the ministry do?",
        "We focus on supporting the aged and elderly through financial support, provision of essential goods, and healthcare assistance to ensure they live with dignity and comfort.",
    ),
    (
        "How can I support the ministry?",
        "You can support us through financial donations, volunteering your time, or donating essential items like food and clothing. Please verify our bank details in the Donation section.",
    ),
    (
        "Who benefits from the ministry?",
        "Our primary beneficiaries are elderly individuals who lack adequate support systems, financial means, or family care. We strive to reach the most vulnerable in our community.",
    ),
];

/// (title, image URL, category)
const DEFAULT_GALLERY: [(&str, &str, &str); 4] = [
    (
        "Community Outreach",
        "https://images.unsplash.com/photo-1576765608535-5f04d1e3f289?auto=format&fit=crop&q=80",
        "outreach",
    ),
    (
        "Healthcare Support",
        "https://images.unsplash.com/photo-1584515933487-9bfa95f5370f?auto=format&fit=crop&q=80",
        "activity",
    ),
    (
        "Food Distribution",
        "https://images.unsplash.com/photo-1469571486292-0ba58a3f068b?auto=format&fit=crop&q=80",
        "activity",
    ),
    (
        "Ministry Gathering",
        "https://images.unsplash.com/photo-1529070538774-1843cb3265df?auto=format&fit=crop&q=80",
        "founder",
    ),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub faqs_inserted: usize,
    pub gallery_inserted: usize,
}

/// Insert the default FAQs (order 1..=3) if there are none, and independently the
/// default gallery items if there are none.
///
/// Check-then-insert is not atomic: two instances starting against the same empty
/// database can both seed.
pub async fn seed_defaults(storage: &dyn Storage) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    if storage.get_faqs().await?.is_empty() {
        for (order, (question, answer)) in (1..).zip(DEFAULT_FAQS) {
            storage
                .create_faq(NewFaq {
                    question: question.into(),
                    answer: answer.into(),
                    order: Some(order),
                })
                .await?;
            report.faqs_inserted += 1;
        }
    }

    if storage.get_gallery_items().await?.is_empty() {
        for (title, image_url, category) in DEFAULT_GALLERY {
            storage
                .create_gallery_item(NewGalleryItem {
                    title: title.into(),
                    image_url: image_url.into(),
                    category: category.into(),
                })
                .await?;
            report.gallery_inserted += 1;
        }
    }

    tracing::info!(
        faqs_inserted = report.faqs_inserted,
        gallery_inserted = report.gallery_inserted,
        "seeding complete"
    );
    Ok(report)
}

/// Run [`seed_defaults`] on a background task. Failures are logged and never reach
/// the caller, so the API can serve while seeding runs or after it fails.
pub fn spawn_seeding(storage: Arc<dyn Storage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = seed_defaults(storage.as_ref()).await {
            tracing::error!(error = %e, "seeding default content failed");
        }
    })
}
