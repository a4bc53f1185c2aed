use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::ActivityError;

/// Everything a handler can fail with, rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Activity(#[from] ActivityError),

    /// Path or query input that never reached the service.
    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Activity(ActivityError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Activity(
                ActivityError::AlreadyRegistered { .. }
                | ActivityError::CapacityExceeded { .. }
                | ActivityError::NotRegistered { .. },
            ) => StatusCode::BAD_REQUEST,
            ApiError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
