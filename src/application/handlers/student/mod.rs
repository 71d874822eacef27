//! Student command and query handlers.

mod create_student;
mod delete_student;
mod get_student;
mod list_students;

pub use create_student::{CreateStudentCommand, CreateStudentHandler};
pub use delete_student::{DeleteStudentCommand, DeleteStudentHandler};
pub use get_student::{GetStudentHandler, GetStudentQuery};
pub use list_students::ListStudentsHandler;
