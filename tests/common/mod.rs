#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use ministry_site::models::{
    FaqRecord, GalleryItemRecord, InquiryRecord, NewFaq, NewGalleryItem, NewInquiry,
};
use ministry_site::{site_router, AppError, AppState, MemStorage, Storage};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

pub fn app_with(storage: Arc<dyn Storage>) -> Router {
    site_router(AppState::new(storage), BODY_LIMIT)
}

pub fn memory_app() -> (Router, Arc<MemStorage>) {
    let storage = Arc::new(MemStorage::new());
    (app_with(storage.clone()), storage)
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    send(app, req).await
}

/// Store whose every operation fails, standing in for a lost database connection.
pub struct BrokenStorage;

#[async_trait]
impl Storage for BrokenStorage {
    async fn create_inquiry(&self, _: NewInquiry) -> Result<InquiryRecord, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
    async fn get_faqs(&self) -> Result<Vec<FaqRecord>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
    async fn create_faq(&self, _: NewFaq) -> Result<FaqRecord, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
    async fn get_gallery_items(&self) -> Result<Vec<GalleryItemRecord>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
    async fn create_gallery_item(&self, _: NewGalleryItem) -> Result<GalleryItemRecord, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}
