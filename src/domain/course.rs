//! Course records.

use serde::{Deserialize, Serialize};

use super::id::CourseId;
use super::payload;

/// A persisted course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub course_id: CourseId,
    pub course_name: String,
    pub course_code: String,
    pub course_description: Option<String>,
}

/// Unvalidated course creation payload.
///
/// Every field is optional here; validation decides which absences are
/// errors. Falsy JSON values decode as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourseDraft {
    #[serde(deserialize_with = "payload::text")]
    pub course_name: Option<String>,
    #[serde(deserialize_with = "payload::text")]
    pub course_code: Option<String>,
    #[serde(deserialize_with = "payload::text")]
    pub course_description: Option<String>,
}

/// A validated course ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub course_name: String,
    pub course_code: String,
    pub course_description: String,
}

impl NewCourse {
    /// Attach the store-assigned identifier.
    #[must_use]
    pub fn with_id(self, course_id: CourseId) -> Course {
        Course {
            course_id,
            course_name: self.course_name,
            course_code: self.course_code,
            course_description: Some(self.course_description),
        }
    }
}
