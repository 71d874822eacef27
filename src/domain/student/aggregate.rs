//! Student entity.
//!
//! Students live independently of courses; a course only holds their ids.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StudentId, Timestamp, ValidationError};

/// Maximum length for a student name.
pub const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
    birth_date: Option<NaiveDate>,
    created_at: Timestamp,
}

/// A validated student awaiting a store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    name: String,
    birth_date: Option<NaiveDate>,
    created_at: Timestamp,
}

impl StudentDraft {
    pub fn new(
        name: impl Into<String>,
        birth_date: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be at most {} characters", MAX_NAME_LENGTH),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            birth_date,
            created_at: Timestamp::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            birth_date: self.birth_date,
            created_at: self.created_at,
        }
    }
}

impl Student {
    /// Reconstitute a student from persistence (no validation).
    pub fn reconstitute(
        id: StudentId,
        name: String,
        birth_date: Option<NaiveDate>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            birth_date,
            created_at,
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
