//! HTTP DTOs for student endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::student::Student;

/// Request to register a student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    pub created_at: String,
}

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id().as_i64(),
            name: student.name().to_string(),
            birth_date: student.birth_date(),
            created_at: student.created_at().to_rfc3339(),
        }
    }
}
