//! Course-specific error types.

use crate::domain::foundation::{CourseId, DomainError, ErrorCode, StudentId, ValidationError};

/// Course-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// Course was not found.
    NotFound(CourseId),
    /// Validation failed; nothing was written.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl CourseError {
    pub fn not_found(id: CourseId) -> Self {
        CourseError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CourseError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unknown_students(ids: &[StudentId]) -> Self {
        let listed = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        CourseError::validation("students", format!("Unknown student ids: {}", listed))
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CourseError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CourseError::NotFound(_) => ErrorCode::CourseNotFound,
            CourseError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CourseError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CourseError::NotFound(id) => format!("Course not found: {}", id),
            CourseError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CourseError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CourseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CourseError {}

impl From<ValidationError> for CourseError {
    fn from(err: ValidationError) -> Self {
        CourseError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for CourseError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => CourseError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::CourseNotFound => match err.details.get("id").and_then(|id| id.parse().ok()) {
                Some(id) => CourseError::NotFound(id),
                None => CourseError::Infrastructure(err.to_string()),
            },
            _ => CourseError::Infrastructure(err.to_string()),
        }
    }
}
