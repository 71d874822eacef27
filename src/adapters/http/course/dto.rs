//! HTTP DTOs (Data Transfer Objects) for course endpoints.
//!
//! These types define the JSON request/response structure for the course API.

use serde::{Deserialize, Serialize};

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, StudentId, ValidationError};
use crate::ports::CourseFilter;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a new course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    /// Enrolled student ids. Omitted means no students.
    #[serde(default)]
    pub students: Vec<StudentId>,
}

/// Partial update. Absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub students: Option<Vec<StudentId>>,
}

/// Full update. The name is mandatory; absent students keep the current set.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceCourseRequest {
    pub name: String,
    #[serde(default)]
    pub students: Option<Vec<StudentId>>,
}

/// Query string for `GET /courses/`.
///
/// Values arrive as raw strings; a blank value (`?name=`) means the filter
/// is absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCoursesParams {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl TryFrom<ListCoursesParams> for CourseFilter {
    type Error = ValidationError;

    fn try_from(params: ListCoursesParams) -> Result<Self, Self::Error> {
        let id = match present(params.id) {
            Some(raw) => Some(
                raw.parse::<CourseId>()
                    .map_err(|_| ValidationError::invalid_format("id", "must be an integer"))?,
            ),
            None => None,
        };

        Ok(CourseFilter {
            id,
            name: present(params.name),
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub students: Vec<i64>,
    /// ISO 8601.
    pub created_at: String,
    /// ISO 8601.
    pub updated_at: String,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().as_i64(),
            name: course.name().to_string(),
            students: course.students().iter().map(StudentId::as_i64).collect(),
            created_at: course.created_at().to_rfc3339(),
            updated_at: course.updated_at().to_rfc3339(),
        }
    }
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self::from(&course)
    }
}
