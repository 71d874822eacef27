//! DeleteStudentHandler - Command handler for removing students.
//!
//! The student's membership links are dropped from every course.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::StudentId;
use crate::domain::student::StudentError;
use crate::ports::StudentRepository;

#[derive(Debug, Clone)]
pub struct DeleteStudentCommand {
    pub student_id: StudentId,
}

pub struct DeleteStudentHandler {
    students: Arc<dyn StudentRepository>,
}

impl DeleteStudentHandler {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    pub async fn handle(&self, cmd: DeleteStudentCommand) -> Result<(), StudentError> {
        self.students.delete(cmd.student_id).await?;
        info!(student_id = %cmd.student_id, "Student deleted");
        Ok(())
    }
}
