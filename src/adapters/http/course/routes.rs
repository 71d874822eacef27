//! Route configuration for course endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_course, delete_course, get_course, list_courses, replace_course, update_course,
    CourseAppState,
};

/// Creates the course router.
///
/// Routes:
/// - `GET /courses/` - List courses (`?id=` and `?name=` filters)
/// - `POST /courses/` - Create a course
/// - `GET /courses/:id/` - Get a course
/// - `PATCH /courses/:id/` - Partially update a course
/// - `PUT /courses/:id/` - Replace a course
/// - `DELETE /courses/:id/` - Delete a course
pub fn course_router() -> Router<CourseAppState> {
    Router::new()
        .route("/courses/", get(list_courses).post(create_course))
        .route(
            "/courses/:id/",
            get(get_course)
                .patch(update_course)
                .put(replace_course)
                .delete(delete_course),
        )
}
