//! Typed errors and HTTP mapping.

use crate::response::MessageBody;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Client-supplied data failed a schema check. `field` is the path of the first
/// offending field (`name`, `2.imageUrl`), absent when the body itself is malformed.
/// Serializes as the 400 wire body.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Error about the payload as a whole.
    pub fn body(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// Prefix the field path, e.g. `name` -> `3.name` for list element 3.
    pub fn at_index(mut self, index: usize) -> Self {
        self.field = Some(match self.field.take() {
            Some(f) => format!("{}.{}", index, f),
            None => index.to_string(),
        });
        self
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, Json(err)).into_response(),
            AppError::Body(rejection) => {
                let status = rejection.status();
                if status.is_client_error() && status != StatusCode::PAYLOAD_TOO_LARGE {
                    (StatusCode::BAD_REQUEST, Json(ValidationError::body(rejection.body_text())))
                        .into_response()
                } else {
                    (
                        status,
                        Json(MessageBody {
                            message: rejection.body_text(),
                        }),
                    )
                        .into_response()
                }
            }
            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(MessageBody {
                    message: format!("Not found: {}", what),
                }),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: "Internal Server Error".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
