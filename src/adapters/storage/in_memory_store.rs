//! In-Memory Store Adapter
//!
//! Holds courses, students and membership links in memory behind one lock,
//! so each write is checked and applied in a single critical section.
//! Useful for testing and for running without a database.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::course::{Course, CourseDraft};
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, StudentId};
use crate::domain::student::{Student, StudentDraft};
use crate::ports::{CourseFilter, CourseRepository, StudentRepository};

#[derive(Debug, Default)]
struct StoreState {
    courses: BTreeMap<CourseId, Course>,
    students: BTreeMap<StudentId, Student>,
    last_course_id: i64,
    last_student_id: i64,
}

impl StoreState {
    fn missing_students(&self, ids: &[StudentId]) -> Vec<StudentId> {
        ids.iter()
            .filter(|id| !self.students.contains_key(*id))
            .copied()
            .collect()
    }

    fn check_students_exist(&self, ids: &[StudentId]) -> Result<(), DomainError> {
        let missing = self.missing_students(ids);
        if missing.is_empty() {
            return Ok(());
        }
        let listed = missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Unknown student ids: {}", listed),
        )
        .with_detail("field", "students"))
    }
}

/// In-memory implementation of both repository ports.
///
/// Clones share the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored courses.
    pub async fn course_count(&self) -> usize {
        self.state.read().await.courses.len()
    }

    /// Number of stored students.
    pub async fn student_count(&self) -> usize {
        self.state.read().await.students.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        *self.state.write().await = StoreState::default();
    }
}

fn course_not_found(id: CourseId) -> DomainError {
    DomainError::new(ErrorCode::CourseNotFound, format!("Course not found: {}", id))
        .with_detail("id", id.to_string())
}

fn student_not_found(id: StudentId) -> DomainError {
    DomainError::new(
        ErrorCode::StudentNotFound,
        format!("Student not found: {}", id),
    )
    .with_detail("id", id.to_string())
}

#[async_trait]
impl CourseRepository for InMemoryStore {
    async fn insert(&self, draft: &CourseDraft) -> Result<Course, DomainError> {
        let mut state = self.state.write().await;
        state.check_students_exist(draft.students())?;

        state.last_course_id += 1;
        let course = draft.clone().into_course(CourseId::new(state.last_course_id));
        state.courses.insert(course.id(), course.clone());
        Ok(course)
    }

    async fn update(&self, course: &Course) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.courses.contains_key(&course.id()) {
            return Err(course_not_found(course.id()));
        }
        state.check_students_exist(course.students())?;

        state.courses.insert(course.id(), course.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, DomainError> {
        Ok(self.state.read().await.courses.get(&id).cloned())
    }

    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .courses
            .values()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: CourseId) -> Result<(), DomainError> {
        self.state
            .write()
            .await
            .courses
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| course_not_found(id))
    }
}

#[async_trait]
impl StudentRepository for InMemoryStore {
    async fn insert(&self, draft: &StudentDraft) -> Result<Student, DomainError> {
        let mut state = self.state.write().await;
        state.last_student_id += 1;
        let student = draft
            .clone()
            .into_student(StudentId::new(state.last_student_id));
        state.students.insert(student.id(), student.clone());
        Ok(student)
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, DomainError> {
        Ok(self.state.read().await.students.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Student>, DomainError> {
        Ok(self.state.read().await.students.values().cloned().collect())
    }

    async fn find_missing(&self, ids: &[StudentId]) -> Result<Vec<StudentId>, DomainError> {
        Ok(self.state.read().await.missing_students(ids))
    }

    async fn delete(&self, id: StudentId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.students.remove(&id).is_none() {
            return Err(student_not_found(id));
        }
        for course in state.courses.values_mut() {
            course.remove_student(id);
        }
        Ok(())
    }
}
