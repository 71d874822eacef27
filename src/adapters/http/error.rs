//! Error responses shared by every HTTP module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tracing::error;

use crate::domain::course::CourseError;
use crate::domain::student::StudentError;

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource, id),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Validation { field: String, message: String },
    NotFound { resource: &'static str, id: String },
    Internal(String),
}

impl From<CourseError> for ApiError {
    fn from(err: CourseError) -> Self {
        match err {
            CourseError::NotFound(id) => ApiError::NotFound {
                resource: "Course",
                id: id.to_string(),
            },
            CourseError::ValidationFailed { field, message } => {
                ApiError::Validation { field, message }
            }
            CourseError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<StudentError> for ApiError {
    fn from(err: StudentError) -> Self {
        match err {
            StudentError::NotFound(id) => ApiError::NotFound {
                resource: "Student",
                id: id.to_string(),
            },
            StudentError::ValidationFailed { field, message } => {
                ApiError::Validation { field, message }
            }
            StudentError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(&field, message),
            ),
            ApiError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found(resource, &id),
            ),
            ApiError::Internal(msg) => {
                error!(error = %msg, "Request failed on storage");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
