//! Runs only when `TEST_DATABASE_URL` points at a reachable PostgreSQL server.
//! Each test works in its own schema, dropped at the end.

use ministry_site::models::{NewFaq, NewGalleryItem, NewInquiry};
use ministry_site::{apply_migrations, seed_defaults, PgStorage, Storage};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::{SystemTime, UNIX_EPOCH};

async fn test_storage(tag: &str) -> Option<(PgStorage, String)> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to TEST_DATABASE_URL");
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let schema = format!("ministry_test_{}_{}_{}", tag, std::process::id(), nanos);
    apply_migrations(&pool, &schema).await.expect("migrations");
    Some((PgStorage::new(pool, &schema), schema))
}

async fn drop_schema(pool: &PgPool, schema: &str) {
    sqlx::query(&format!("DROP SCHEMA IF EXISTS \"{}\" CASCADE", schema))
        .execute(pool)
        .await
        .expect("drop schema");
}

#[tokio::test]
async fn inquiries_round_trip_through_postgres() {
    let Some((storage, schema)) = test_storage("inq").await else {
        return;
    };

    let a = storage
        .create_inquiry(NewInquiry {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Hello".into(),
        })
        .await
        .unwrap();
    let b = storage
        .create_inquiry(NewInquiry {
            name: "John".into(),
            email: "john@example.com".into(),
            message: "Hi".into(),
        })
        .await
        .unwrap();
    assert!(a.id >= 1);
    assert_ne!(a.id, b.id);
    assert_eq!(a.name, "Jane Doe");
    storage.ping().await.unwrap();

    drop_schema(storage.pool(), &schema).await;
}

#[tokio::test]
async fn faqs_sorted_and_default_order_assigned() {
    let Some((storage, schema)) = test_storage("faq").await else {
        return;
    };

    for (q, order) in [("c", Some(9)), ("a", Some(-2)), ("b", Some(3))] {
        storage
            .create_faq(NewFaq {
                question: q.into(),
                answer: "x".into(),
                order,
            })
            .await
            .unwrap();
    }
    let auto = storage
        .create_faq(NewFaq {
            question: "d".into(),
            answer: "x".into(),
            order: None,
        })
        .await
        .unwrap();
    assert!(auto.order >= 1);

    let faqs = storage.get_faqs().await.unwrap();
    assert_eq!(faqs.len(), 4);
    assert!(faqs.windows(2).all(|w| w[0].order <= w[1].order));
    assert_eq!(faqs[0].question, "a");

    drop_schema(storage.pool(), &schema).await;
}

#[tokio::test]
async fn gallery_and_seeding_against_postgres() {
    let Some((storage, schema)) = test_storage("gal").await else {
        return;
    };

    let report = seed_defaults(&storage).await.unwrap();
    assert_eq!(report.faqs_inserted, 3);
    assert_eq!(report.gallery_inserted, 4);
    assert_eq!(seed_defaults(&storage).await.unwrap().gallery_inserted, 0);

    let item = storage
        .create_gallery_item(NewGalleryItem {
            title: "Choir".into(),
            image_url: "https://example.com/choir.jpg".into(),
            category: "activity".into(),
        })
        .await
        .unwrap();
    let items = storage.get_gallery_items().await.unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items.iter().filter(|i| i.id == item.id).count(), 1);

    drop_schema(storage.pool(), &schema).await;
}
