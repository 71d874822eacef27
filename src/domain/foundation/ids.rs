//! Strongly-typed identifier value objects.
//!
//! Identifiers are assigned by the store on insert and grow monotonically,
//! so ordering by id is the same as ordering by insertion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(i64);

impl CourseId {
    /// Wraps a raw store-assigned id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Wraps a raw store-assigned id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_id_parses_from_valid_string() {
        let id: CourseId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn course_id_rejects_non_numeric_string() {
        assert!("abc".parse::<CourseId>().is_err());
    }

    #[test]
    fn course_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&CourseId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn student_id_deserializes_from_number() {
        let id: StudentId = serde_json::from_str("13").unwrap();
        assert_eq!(id, StudentId::new(13));
    }

    #[test]
    fn ids_order_by_value() {
        assert!(StudentId::new(1) < StudentId::new(2));
        assert!(CourseId::new(10) > CourseId::new(9));
    }
}
