use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::response::ErrorResponse;

/// Errors surfaced to API callers as `400 {"error": ...}`
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid value for '{field}': could not convert '{value}' to a number")]
    InvalidInput { field: &'static str, value: String },

    #[error("Malformed form data: {0}")]
    MalformedForm(String),

    #[error("Invalid property record: {0}")]
    InvalidRecord(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. }
            | AppError::MalformedForm(_)
            | AppError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejecting request: {}", self);
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Start-up configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {name}: '{value}' ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}
