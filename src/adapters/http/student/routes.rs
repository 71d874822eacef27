//! Route configuration for student endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_student, delete_student, get_student, list_students, StudentAppState,
};

/// Creates the student router.
///
/// Routes:
/// - `GET /students/` - List students
/// - `POST /students/` - Register a student
/// - `GET /students/:id/` - Get a student
/// - `DELETE /students/:id/` - Delete a student and drop its enrollments
pub fn student_router() -> Router<StudentAppState> {
    Router::new()
        .route("/students/", get(list_students).post(create_student))
        .route("/students/:id/", get(get_student).delete(delete_student))
}
