//! Enrollment configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::course::{EnrollmentPolicy, DEFAULT_MAX_STUDENTS_PER_COURSE};

/// Enrollment limits
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentConfig {
    /// Maximum number of students on one course
    #[serde(default = "default_max_students")]
    pub max_students_per_course: usize,
}

impl EnrollmentConfig {
    pub fn policy(&self) -> EnrollmentPolicy {
        EnrollmentPolicy::new(self.max_students_per_course)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_students_per_course == 0 {
            return Err(ValidationError::InvalidStudentLimit);
        }
        Ok(())
    }
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            max_students_per_course: default_max_students(),
        }
    }
}

fn default_max_students() -> usize {
    DEFAULT_MAX_STUDENTS_PER_COURSE
}
