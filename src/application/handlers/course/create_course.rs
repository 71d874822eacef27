//! CreateCourseHandler - Command handler for creating new courses.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::course::{Course, CourseDraft, CourseError, EnrollmentPolicy};
use crate::domain::foundation::StudentId;
use crate::ports::{CourseRepository, StudentRepository};

/// Command to create a new course.
#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    pub name: String,
    pub students: Vec<StudentId>,
}

/// Handler for creating courses.
pub struct CreateCourseHandler {
    courses: Arc<dyn CourseRepository>,
    students: Arc<dyn StudentRepository>,
    policy: EnrollmentPolicy,
}

impl CreateCourseHandler {
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

    pub async fn handle(&self, cmd: CreateCourseCommand) -> Result<Course, CourseError> {
        // 1. Validate name and enrollment cap before touching storage
        let draft = CourseDraft::new(cmd.name, cmd.students, &self.policy).map_err(|e| {
            warn!(error = %e, "Course creation rejected");
            e
        })?;

        // 2. Every referenced student must exist
        let missing = self.students.find_missing(draft.students()).await?;
        if !missing.is_empty() {
            let err = CourseError::unknown_students(&missing);
            warn!(error = %err, "Course creation rejected");
            return Err(err);
        }

        // 3. Persist course and membership links together
        let course = self.courses.insert(&draft).await?;

        info!(
            course_id = %course.id(),
            students = course.student_count(),
            "Course created"
        );
        Ok(course)
    }
}
