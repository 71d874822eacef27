//! HTTP adapter for the course module.
//!
//! # Endpoints
//!
//! - `GET /courses/` - List courses, filterable by `id` and `name`
//! - `POST /courses/` - Create a course
//! - `GET|PATCH|PUT|DELETE /courses/{id}/` - Single course operations

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CourseAppState;
pub use routes::course_router;
