//! UpdateCourseHandler - Command handler for partial course updates.
//!
//! Serves both PATCH (any subset of fields) and PUT (name required by the
//! HTTP layer). A `students` value replaces the whole membership set.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::course::{Course, CourseChanges, CourseError, EnrollmentPolicy};
use crate::domain::foundation::{CourseId, StudentId};
use crate::ports::{CourseRepository, StudentRepository};

/// Command to update an existing course.
#[derive(Debug, Clone)]
pub struct UpdateCourseCommand {
    pub course_id: CourseId,
    pub name: Option<String>,
    pub students: Option<Vec<StudentId>>,
}

/// Handler for updating courses.
pub struct UpdateCourseHandler {
    courses: Arc<dyn CourseRepository>,
    students: Arc<dyn StudentRepository>,
    policy: EnrollmentPolicy,
}

impl UpdateCourseHandler {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        students: Arc<dyn StudentRepository>,
        policy: EnrollmentPolicy,
    ) -> Self {
        Self {
            courses,
            students,
            policy,
        }
    }

    pub async fn handle(&self, cmd: UpdateCourseCommand) -> Result<Course, CourseError> {
        let mut course = self
            .courses
            .find_by_id(cmd.course_id)
            .await?
            .ok_or_else(|| CourseError::not_found(cmd.course_id))?;

        let changes = CourseChanges {
            name: cmd.name,
            students: cmd.students,
        };
        let students_changed = changes.students.is_some();

        course.apply(changes, &self.policy).map_err(|e| {
            warn!(course_id = %cmd.course_id, error = %e, "Course update rejected");
            e
        })?;

        if students_changed {
            let missing = self.students.find_missing(course.students()).await?;
            if !missing.is_empty() {
                let err = CourseError::unknown_students(&missing);
                warn!(course_id = %cmd.course_id, error = %err, "Course update rejected");
                return Err(err);
            }
        }

        self.courses.update(&course).await?;

        info!(
            course_id = %course.id(),
            students = course.student_count(),
            "Course updated"
        );
        Ok(course)
    }
}
