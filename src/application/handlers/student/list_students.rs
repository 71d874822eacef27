//! ListStudentsHandler - Query handler for listing students.

use std::sync::Arc;

use crate::domain::student::{Student, StudentError};
use crate::ports::StudentRepository;

pub struct ListStudentsHandler {
    students: Arc<dyn StudentRepository>,
}

impl ListStudentsHandler {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    pub async fn handle(&self) -> Result<Vec<Student>, StudentError> {
        Ok(self.students.list().await?)
    }
}
