//! HTTP adapter for the student module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::StudentAppState;
pub use routes::student_router;
