//! Student repository port.

use crate::domain::foundation::{DomainError, StudentId};
use crate::domain::student::{Student, StudentDraft};
use async_trait::async_trait;

/// Repository port for Student persistence.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Store a new student and return it with its assigned id.
    async fn insert(&self, draft: &StudentDraft) -> Result<Student, DomainError>;

    /// Find a student by its ID.
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, DomainError>;

    /// List all students, ordered by id.
    async fn list(&self) -> Result<Vec<Student>, DomainError>;

    /// Returns the subset of `ids` that does not exist, in input order.
    async fn find_missing(&self, ids: &[StudentId]) -> Result<Vec<StudentId>, DomainError>;

    /// Delete a student and every membership link referencing it.
    ///
    /// # Errors
    ///
    /// - `StudentNotFound` (detail `id`) if the student doesn't exist
    async fn delete(&self, id: StudentId) -> Result<(), DomainError>;
}
