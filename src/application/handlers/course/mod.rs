//! Course command and query handlers.

mod create_course;
mod delete_course;
mod get_course;
mod list_courses;
mod update_course;

pub use create_course::{CreateCourseCommand, CreateCourseHandler};
pub use delete_course::{DeleteCourseCommand, DeleteCourseHandler};
pub use get_course::{GetCourseHandler, GetCourseQuery};
pub use list_courses::{ListCoursesHandler, ListCoursesQuery};
pub use update_course::{UpdateCourseCommand, UpdateCourseHandler};
