use crate::error::AppError;
use crate::models::Faq;
use crate::response::ok_many;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

/// GET /api/faqs: all FAQs ascending by `order`.
pub async fn list_faqs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.storage.get_faqs().await?;
    Ok(ok_many(rows.into_iter().map(Faq::from).collect()))
}
