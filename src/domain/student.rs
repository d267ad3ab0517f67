//! Student records.

use serde::{Deserialize, Serialize};

use super::id::StudentId;
use super::payload;

/// A persisted student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub student_id: StudentId,
    pub roll_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

/// Unvalidated student creation payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudentDraft {
    #[serde(deserialize_with = "payload::text")]
    pub roll_number: Option<String>,
    #[serde(deserialize_with = "payload::text")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "payload::text")]
    pub last_name: Option<String>,
}

/// A validated student ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub roll_number: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewStudent {
    /// Attach the store-assigned identifier.
    #[must_use]
    pub fn with_id(self, student_id: StudentId) -> Student {
        Student {
            student_id,
            roll_number: self.roll_number,
            first_name: self.first_name,
            last_name: Some(self.last_name),
        }
    }
}
