//! Course repository port.
//!
//! Defines the contract for persisting and retrieving Course aggregates
//! together with their membership links.
//!
//! # Design
//!
//! - **Atomic writes**: `insert`, `update` and `delete` each apply the course
//!   row and its membership links as one unit
//! - **Insertion order**: `list` returns courses ordered by id

use crate::domain::course::{Course, CourseDraft};
use crate::domain::foundation::{CourseId, DomainError};
use async_trait::async_trait;

/// Exact-match filter for listing courses. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub id: Option<CourseId>,
    pub name: Option<String>,
}

impl CourseFilter {
    pub fn by_id(id: CourseId) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// Returns true if the course satisfies every present criterion.
    pub fn matches(&self, course: &Course) -> bool {
        self.id.map_or(true, |id| course.id() == id)
            && self.name.as_deref().map_or(true, |name| course.name() == name)
    }
}

/// Repository port for Course persistence.
///
/// Implementations must ensure:
/// - Ids are assigned on insert and increase monotonically
/// - Membership links are written in the same transaction as the course row
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Store a new course and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` (detail `field=students`) if a referenced student does not exist
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, draft: &CourseDraft) -> Result<Course, DomainError>;

    /// Overwrite an existing course, replacing its membership links.
    ///
    /// # Errors
    ///
    /// - `CourseNotFound` (detail `id`) if the course doesn't exist
    /// - `ValidationFailed` if a referenced student does not exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, course: &Course) -> Result<(), DomainError>;

    /// Find a course by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, DomainError>;

    /// List courses matching the filter, ordered by id.
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, DomainError>;

    /// Delete a course and its membership links.
    ///
    /// # Errors
    ///
    /// - `CourseNotFound` (detail `id`) if the course doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: CourseId) -> Result<(), DomainError>;
}
