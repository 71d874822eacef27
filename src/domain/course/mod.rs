//! Course domain module.
//!
//! A course is a named record with a set of enrolled students. The only
//! business rule is the enrollment cap enforced by [`EnrollmentPolicy`].

mod aggregate;
mod enrollment;
mod errors;

pub use aggregate::{Course, CourseChanges, CourseDraft, MAX_NAME_LENGTH};
pub use enrollment::{normalize_students, EnrollmentPolicy, DEFAULT_MAX_STUDENTS_PER_COURSE};
pub use errors::CourseError;
