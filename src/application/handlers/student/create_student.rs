//! CreateStudentHandler - Command handler for registering students.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::student::{Student, StudentDraft, StudentError};
use crate::ports::StudentRepository;

/// Command to create a new student.
#[derive(Debug, Clone)]
pub struct CreateStudentCommand {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
}

/// Handler for creating students.
pub struct CreateStudentHandler {
    students: Arc<dyn StudentRepository>,
}

impl CreateStudentHandler {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    pub async fn handle(&self, cmd: CreateStudentCommand) -> Result<Student, StudentError> {
        let draft = StudentDraft::new(cmd.name, cmd.birth_date)?;
        let student = self.students.insert(&draft).await?;
        info!(student_id = %student.id(), "Student created");
        Ok(student)
    }
}
