//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` stitches them together.

pub mod course;
pub mod error;
pub mod router;
pub mod student;

// Re-export key types for convenience
pub use course::{course_router, CourseAppState};
pub use error::{ApiError, ErrorResponse};
pub use router::{app_router, API_PREFIX};
pub use student::{student_router, StudentAppState};
