//! GetCourseHandler - Query handler for retrieving one course.

use std::sync::Arc;

use crate::domain::course::{Course, CourseError};
use crate::domain::foundation::CourseId;
use crate::ports::CourseRepository;

/// Query to get a course by ID.
#[derive(Debug, Clone)]
pub struct GetCourseQuery {
    pub course_id: CourseId,
}

/// Handler for retrieving course details.
pub struct GetCourseHandler {
    courses: Arc<dyn CourseRepository>,
}

impl GetCourseHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, query: GetCourseQuery) -> Result<Course, CourseError> {
        self.courses
            .find_by_id(query.course_id)
            .await?
            .ok_or_else(|| CourseError::not_found(query.course_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use crate::domain::course::{CourseDraft, EnrollmentPolicy};

    #[tokio::test]
    async fn returns_stored_course() {
        let store = InMemoryStore::new();
        let draft = CourseDraft::new("Algebra", vec![], &EnrollmentPolicy::default()).unwrap();
        let created = CourseRepository::insert(&store, &draft).await.unwrap();

        let course = GetCourseHandler::new(Arc::new(store))
            .handle(GetCourseQuery {
                course_id: created.id(),
            })
            .await
            .unwrap();

        assert_eq!(course, created);
    }

    #[tokio::test]
    async fn missing_course_is_not_found() {
        let result = GetCourseHandler::new(Arc::new(InMemoryStore::new()))
            .handle(GetCourseQuery {
                course_id: CourseId::new(7),
            })
            .await;

        assert_eq!(result, Err(CourseError::NotFound(CourseId::new(7))));
    }
}
