//! ListCoursesHandler - Query handler for listing courses.

use std::sync::Arc;

use crate::domain::course::{Course, CourseError};
use crate::ports::{CourseFilter, CourseRepository};

/// Query to list courses, optionally filtered by exact id and/or name.
#[derive(Debug, Clone, Default)]
pub struct ListCoursesQuery {
    pub filter: CourseFilter,
}

/// Handler for listing courses in insertion order.
pub struct ListCoursesHandler {
    courses: Arc<dyn CourseRepository>,
}

impl ListCoursesHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, query: ListCoursesQuery) -> Result<Vec<Course>, CourseError> {
        Ok(self.courses.list(&query.filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use crate::domain::course::{CourseDraft, EnrollmentPolicy};
    use crate::domain::foundation::CourseId;

    async fn seed(store: &InMemoryStore, n: usize) -> Vec<Course> {
        let mut courses = Vec::new();
        for i in 0..n {
            let draft =
                CourseDraft::new(format!("Course {}", i), vec![], &EnrollmentPolicy::default())
                    .unwrap();
            courses.push(CourseRepository::insert(store, &draft).await.unwrap());
        }
        courses
    }

    #[tokio::test]
    async fn lists_all_courses_in_creation_order() {
        let store = InMemoryStore::new();
        let created = seed(&store, 10).await;

        let listed = ListCoursesHandler::new(Arc::new(store))
            .handle(ListCoursesQuery::default())
            .await
            .unwrap();

        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn filters_by_id() {
        let store = InMemoryStore::new();
        let created = seed(&store, 10).await;

        let listed = ListCoursesHandler::new(Arc::new(store))
            .handle(ListCoursesQuery {
                filter: CourseFilter::by_id(created[1].id()),
            })
            .await
            .unwrap();

        assert_eq!(listed, vec![created[1].clone()]);
    }

    #[tokio::test]
    async fn filters_by_name() {
        let store = InMemoryStore::new();
        let created = seed(&store, 10).await;

        let listed = ListCoursesHandler::new(Arc::new(store))
            .handle(ListCoursesQuery {
                filter: CourseFilter::by_name(created[2].name()),
            })
            .await
            .unwrap();

        assert_eq!(listed, vec![created[2].clone()]);
    }

    #[tokio::test]
    async fn unknown_id_yields_empty_list() {
        let store = InMemoryStore::new();
        seed(&store, 3).await;

        let listed = ListCoursesHandler::new(Arc::new(store))
            .handle(ListCoursesQuery {
                filter: CourseFilter::by_id(CourseId::new(999)),
            })
            .await
            .unwrap();

        assert!(listed.is_empty());
    }
}
