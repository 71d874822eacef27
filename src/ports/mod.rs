//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CourseRepository` - Course rows plus membership links
//! - `StudentRepository` - Student rows

mod course_repository;
mod student_repository;

pub use course_repository::{CourseFilter, CourseRepository};
pub use student_repository::StudentRepository;
