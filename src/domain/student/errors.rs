//! Student-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, StudentId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    NotFound(StudentId),
    ValidationFailed { field: String, message: String },
    Infrastructure(String),
}

impl StudentError {
    pub fn not_found(id: StudentId) -> Self {
        StudentError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        StudentError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            StudentError::NotFound(_) => ErrorCode::StudentNotFound,
            StudentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            StudentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            StudentError::NotFound(id) => format!("Student not found: {}", id),
            StudentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            StudentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for StudentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for StudentError {}

impl From<ValidationError> for StudentError {
    fn from(err: ValidationError) -> Self {
        StudentError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for StudentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::StudentNotFound => {
                match err.details.get("id").and_then(|id| id.parse().ok()) {
                    Some(id) => StudentError::NotFound(id),
                    None => StudentError::Infrastructure(err.to_string()),
                }
            }
            _ => StudentError::Infrastructure(err.to_string()),
        }
    }
}
