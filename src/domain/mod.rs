//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `course` - Course aggregate and the enrollment cap
//! - `student` - Student records referenced by courses

pub mod course;
pub mod foundation;
pub mod student;
