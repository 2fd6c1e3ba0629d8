//! Response helpers and the non-validation error body shared by server and client.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// `{ "message": ... }` body used for 404 and 500 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}
