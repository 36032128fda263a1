//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::tmdb::TmdbError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upstream movie database error
    #[error("Upstream error: {0}")]
    Upstream(#[from] TmdbError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Upstream(e) => match e {
                TmdbError::MissingToken => {
                    (StatusCode::SERVICE_UNAVAILABLE, "UPSTREAM_NOT_CONFIGURED")
                }
                TmdbError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT"),
                TmdbError::Unavailable => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE"),
                TmdbError::Request(_) | TmdbError::Status(_) => {
                    (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
                }
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_mapping() {
        let cases = [
            (TmdbError::MissingToken, StatusCode::SERVICE_UNAVAILABLE),
            (TmdbError::Timeout, StatusCode::GATEWAY_TIMEOUT),
            (TmdbError::Unavailable, StatusCode::BAD_GATEWAY),
            (TmdbError::Status(500), StatusCode::BAD_GATEWAY),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Validation("bad path".to_string());
        assert_eq!(err.to_string(), "Validation error: bad path");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
