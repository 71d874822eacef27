//! DeleteCourseHandler - Command handler for removing courses.
//!
//! Removes the course and its membership links. Students are untouched.

use std::sync::Arc;

use tracing::info;

use crate::domain::course::CourseError;
use crate::domain::foundation::CourseId;
use crate::ports::CourseRepository;

/// Command to delete a course.
#[derive(Debug, Clone)]
pub struct DeleteCourseCommand {
    pub course_id: CourseId,
}

/// Handler for deleting courses.
pub struct DeleteCourseHandler {
    courses: Arc<dyn CourseRepository>,
}

impl DeleteCourseHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, cmd: DeleteCourseCommand) -> Result<(), CourseError> {
        self.courses.delete(cmd.course_id).await?;
        info!(course_id = %cmd.course_id, "Course deleted");
        Ok(())
    }
}
