//! Contact-form submissions.

use crate::error::AppError;
use crate::models::{Inquiry, InsertInquiry};
use crate::response::created;
use crate::service::Validated;
use crate::state::AppState;
use axum::extract::{rejection::JsonRejection, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

/// POST /api/inquiries: validate, persist, return the stored inquiry with 201.
pub async fn create_inquiry(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let input = InsertInquiry::from_json(body)?;
    let row = state.storage.create_inquiry(input.into()).await?;
    tracing::info!(id = row.id, "inquiry received");
    Ok(created(Inquiry::from(row)))
}
