//! Course aggregate entity.
//!
//! Courses reference students by ID but do NOT own them. Deleting a course
//! drops its membership links and leaves the students untouched.

use crate::domain::foundation::{CourseId, StudentId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

use super::enrollment::{normalize_students, EnrollmentPolicy};
use super::CourseError;

/// Maximum length for a course name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Course aggregate.
///
/// # Invariants
///
/// - `name` is non-blank and at most 255 characters
/// - `students` is sorted, has no duplicates, and never exceeds the enrollment cap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    name: String,
    students: Vec<StudentId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// A validated course that has not been stored yet.
///
/// The store assigns the id when the draft is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    name: String,
    students: Vec<StudentId>,
    created_at: Timestamp,
}

/// Fields to change on an existing course. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseChanges {
    pub name: Option<String>,
    pub students: Option<Vec<StudentId>>,
}

impl CourseDraft {
    /// Validates a new course.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is blank or too long
    /// - `ValidationFailed` if the student set exceeds the policy cap
    pub fn new(
        name: impl Into<String>,
        students: Vec<StudentId>,
        policy: &EnrollmentPolicy,
    ) -> Result<Self, CourseError> {
        let name = validate_name(name.into())?;
        policy.validate(&students)?;

        Ok(Self {
            name,
            students: normalize_students(students),
            created_at: Timestamp::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Attaches the store-assigned id.
    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            name: self.name,
            students: self.students,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Course {
    /// Reconstitute a course from persistence (no validation).
    pub fn reconstitute(
        id: CourseId,
        name: String,
        students: Vec<StudentId>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            students: normalize_students(students),
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial update.
    ///
    /// Every field is validated before any is assigned, so on error the
    /// course is unchanged.
    pub fn apply(
        &mut self,
        changes: CourseChanges,
        policy: &EnrollmentPolicy,
    ) -> Result<(), CourseError> {
        let name = changes.name.map(validate_name).transpose()?;
        if let Some(students) = &changes.students {
            policy.validate(students)?;
        }

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(students) = changes.students {
            self.students = normalize_students(students);
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Drops a student from this course's membership, if present.
    pub fn remove_student(&mut self, student_id: StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|s| *s != student_id);
        before != self.students.len()
    }
}

fn validate_name(name: String) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::invalid_format(
            "name",
            format!("must be at most {} characters", MAX_NAME_LENGTH),
        ));
    }
    Ok(trimmed.to_string())
}
