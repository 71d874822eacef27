//! GetStudentHandler - Query handler for one student.

use std::sync::Arc;

use crate::domain::foundation::StudentId;
use crate::domain::student::{Student, StudentError};
use crate::ports::StudentRepository;

#[derive(Debug, Clone)]
pub struct GetStudentQuery {
    pub student_id: StudentId,
}

pub struct GetStudentHandler {
    students: Arc<dyn StudentRepository>,
}

impl GetStudentHandler {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    pub async fn handle(&self, query: GetStudentQuery) -> Result<Student, StudentError> {
        self.students
            .find_by_id(query.student_id)
            .await?
            .ok_or_else(|| StudentError::not_found(query.student_id))
    }
}
