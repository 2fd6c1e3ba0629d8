use crate::error::AppError;
use crate::models::GalleryItem;
use crate::response::ok_many;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

/// GET /api/gallery: all gallery items in insertion order.
pub async fn list_gallery(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.storage.get_gallery_items().await?;
    Ok(ok_many(rows.into_iter().map(GalleryItem::from).collect()))
}
