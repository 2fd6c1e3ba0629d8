mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{app_with, get, memory_app, post_json, send, BrokenStorage};
use ministry_site::models::{NewFaq, NewGalleryItem, NewInquiry};
use ministry_site::{seed_defaults, Storage};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn create_inquiry_returns_201_with_stored_record() {
    let (app, _) = memory_app();
    let (status, body) = post_json(
        &app,
        "/api/inquiries",
        &json!({ "name": "Jane Doe", "email": "jane@example.com", "message": "Hello" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["message"], "Hello");
    let created_at = body["createdAt"].as_str().expect("createdAt is a string");
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn inquiry_ids_are_fresh_and_server_controls_created_at() {
    let (app, _) = memory_app();
    let mut seen = HashSet::new();
    for i in 0..5 {
        let (status, body) = post_json(
            &app,
            "/api/inquiries",
            &json!({
                "id": 42,
                "createdAt": "1999-12-31T23:59:59Z",
                "name": format!("Visitor {}", i),
                "email": "visitor@example.com",
                "message": "Please call me back"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_i64().unwrap();
        assert!(id > 0);
        assert!(seen.insert(id), "id {} returned twice", id);
        assert_ne!(body["createdAt"], "1999-12-31T23:59:59Z");
    }
}

#[tokio::test]
async fn empty_name_is_rejected_with_field() {
    let (app, storage) = memory_app();
    let (status, body) = post_json(
        &app,
        "/api/inquiries",
        &json!({ "name": "", "email": "a@b.com", "message": "hi" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "name");
    assert!(!body["message"].as_str().unwrap().is_empty());
    // nothing persisted
    let (status, _) = post_json(
        &app,
        "/api/inquiries",
        &json!({ "name": "ok", "email": "a@b.com", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let next = storage
        .create_inquiry(NewInquiry {
            name: "n".into(),
            email: "e".into(),
            message: "m".into(),
        })
        .await
        .unwrap();
    assert_eq!(next.id, 2);
}

#[tokio::test]
async fn first_invalid_field_is_reported_in_declaration_order() {
    let (app, _) = memory_app();
    let cases = [
        (json!({}), "name"),
        (json!({ "email": "", "message": "" }), "name"),
        (json!({ "name": "Jane", "message": "" }), "email"),
        (json!({ "name": "Jane", "email": "   ", "message": "hi" }), "email"),
        (json!({ "name": "Jane", "email": "j@x.org" }), "message"),
        (json!({ "name": "Jane", "email": "j@x.org", "message": 12 }), "message"),
        (json!({ "name": null, "email": "j@x.org", "message": "hi" }), "name"),
    ];
    for (payload, field) in cases {
        let (status, body) = post_json(&app, "/api/inquiries", &payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(body["field"], field, "{}", payload);
    }
}

#[tokio::test]
async fn malformed_json_is_a_400_without_field() {
    let (app, _) = memory_app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/inquiries")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("field").is_none());
    assert!(body["message"].is_string());

    let (status, body) = post_json(&app, "/api/inquiries", &json!(["Jane"])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("field").is_none());
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let (app, _) = memory_app();
    let message = "a".repeat(common::BODY_LIMIT + 1);
    let payload = json!({ "name": "Jane", "email": "j@x.org", "message": message }).to_string();
    let req = Request::builder()
        .method("POST")
        .uri("/api/inquiries")
        .header("content-type", "application/json")
        .header("content-length", payload.len())
        .body(Body::from(payload))
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn faqs_and_gallery_are_empty_arrays_before_seeding() {
    let (app, _) = memory_app();
    assert_eq!(get(&app, "/api/faqs").await, (StatusCode::OK, json!([])));
    assert_eq!(get(&app, "/api/gallery").await, (StatusCode::OK, json!([])));
}

#[tokio::test]
async fn faqs_are_sorted_by_order_and_stable() {
    let (app, storage) = memory_app();
    for (q, order) in [("third", 30), ("first", -1), ("second", 7), ("second-b", 7)] {
        storage
            .create_faq(NewFaq {
                question: q.into(),
                answer: "answer".into(),
                order: Some(order),
            })
            .await
            .unwrap();
    }

    let (status, first) = get(&app, "/api/faqs").await;
    assert_eq!(status, StatusCode::OK);
    let orders: Vec<i64> = first
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["order"].as_i64().unwrap())
        .collect();
    assert!(orders.windows(2).all(|w| w[0] <= w[1]), "{:?}", orders);
    assert_eq!(first[0]["question"], "first");
    assert!(first[0].get("id").is_some());

    let (_, second) = get(&app, "/api/faqs").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn gallery_lists_every_created_item_once() {
    let (app, storage) = memory_app();
    seed_defaults(storage.as_ref()).await.unwrap();
    let created = storage
        .create_gallery_item(NewGalleryItem {
            title: "Christmas Lunch".into(),
            image_url: "https://example.com/lunch.jpg".into(),
            category: "outreach".into(),
        })
        .await
        .unwrap();

    let (status, body) = get(&app, "/api/gallery").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 5);
    let matches: Vec<_> = items.iter().filter(|i| i["id"] == created.id).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["imageUrl"], "https://example.com/lunch.jpg");
    assert_eq!(matches[0]["category"], "outreach");
    assert!(matches[0]["createdAt"].is_string());
}

#[tokio::test]
async fn no_public_create_for_faqs_or_gallery() {
    let (app, _) = memory_app();
    let (status, _) = post_json(&app, "/api/faqs", &json!({ "question": "q", "answer": "a" })).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let (status, _) = post_json(&app, "/api/gallery", &json!({})).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_404_with_message() {
    let (app, _) = memory_app();
    let (status, body) = get(&app, "/api/donations").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("/api/donations"));
}

#[tokio::test]
async fn health_ready_and_version() {
    let (app, _) = memory_app();
    assert_eq!(get(&app, "/health").await, (StatusCode::OK, json!({ "status": "ok" })));
    assert_eq!(
        get(&app, "/ready").await,
        (StatusCode::OK, json!({ "status": "ok", "database": "ok" }))
    );
    let (status, body) = get(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "ministry-site");
}

#[tokio::test]
async fn storage_failures_become_generic_500() {
    let app = app_with(Arc::new(BrokenStorage));
    let (status, body) = post_json(
        &app,
        "/api/inquiries",
        &json!({ "name": "Jane", "email": "j@x.org", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal Server Error" }));

    let (status, _) = get(&app, "/api/faqs").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let (status, _) = get(&app, "/api/gallery").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn validation_runs_before_storage() {
    let app = app_with(Arc::new(BrokenStorage));
    let (status, body) = post_json(&app, "/api/inquiries", &json!({ "name": "Jane" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "email");
}

#[tokio::test]
async fn ready_reports_degraded_when_storage_is_down() {
    let app = app_with(Arc::new(BrokenStorage));
    assert_eq!(
        get(&app, "/ready").await,
        (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "status": "degraded", "database": "unavailable" })
        )
    );
}
