//! Student domain module.

mod aggregate;
mod errors;

pub use aggregate::{Student, StudentDraft, MAX_NAME_LENGTH};
pub use errors::StudentError;
