//! Enrollment policy - the per-course student cap.
//!
//! The check is a pure function over the proposed student set and runs before
//! anything is written, so a rejected create or update leaves no trace.

use std::collections::BTreeSet;

use crate::domain::foundation::{StudentId, ValidationError};

use super::CourseError;

/// Default cap on students enrolled in a single course.
pub const DEFAULT_MAX_STUDENTS_PER_COURSE: usize = 20;

/// Limits applied to a course's student set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentPolicy {
    max_students: usize,
}

impl EnrollmentPolicy {
    pub fn new(max_students: usize) -> Self {
        Self { max_students }
    }

    pub fn max_students(&self) -> usize {
        self.max_students
    }

    /// Checks a proposed student set against the cap.
    ///
    /// Duplicate ids count once, matching how membership links are stored.
    pub fn validate(&self, students: &[StudentId]) -> Result<(), CourseError> {
        let count = students.iter().collect::<BTreeSet<_>>().len();
        if count > self.max_students {
            return Err(ValidationError::too_many("students", self.max_students, count).into());
        }
        Ok(())
    }
}

impl Default for EnrollmentPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STUDENTS_PER_COURSE)
    }
}

/// Sorts and deduplicates a student set.
pub fn normalize_students(students: impl IntoIterator<Item = StudentId>) -> Vec<StudentId> {
    students
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
