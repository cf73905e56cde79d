//! Boundary error taxonomy
//!
//! Every failure is recovered here and turned into a JSON envelope; nothing
//! propagates far enough to crash the process.

use super::response::ApiResponse;
use crate::query::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Request-boundary errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client sent a bad query or pagination parameters (400)
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Anything unexpected past validation (500)
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                let body = ApiResponse::<()>::err(err.message(), err.to_string());
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!("search request failed: {:#}", err);
                let body = ApiResponse::<()>::err("Internal server error", err.to_string());
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
