//! HTTP error mapping.
//!
//! Clients only ever see two messages. Whatever caused an internal error
//! is logged here and stays on the server.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use recommender::RecommendError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Body was not `{ "bourbonIds": [integer, ...] }`
    #[error("Array of bourbon IDs required")]
    InvalidInput,

    /// Unexpected failure; the detail is for the logs only
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::InvalidInput => ApiError::InvalidInput,
            RecommendError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        info!("Invalid input: {}", rejection.body_text());
        ApiError::InvalidInput
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!("Error in recommend endpoint: {}", detail);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}
