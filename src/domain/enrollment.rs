//! Enrollment records linking a student to a course.
//!
//! The same (student, course) pair may be enrolled any number of times; each
//! enrollment gets its own identifier.

use serde::{Deserialize, Serialize};

use super::id::{CourseId, EnrollmentId, StudentId};
use super::payload;

/// A persisted enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub student_id: StudentId,
    pub course_id: CourseId,
}

/// Unvalidated enrollment creation payload.
///
/// A missing id, or one that is not an integer in the id range, is treated
/// the same as an id that matches no record.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct EnrollmentDraft {
    #[serde(deserialize_with = "payload::reference")]
    pub student_id: Option<StudentId>,
    #[serde(deserialize_with = "payload::reference")]
    pub course_id: Option<CourseId>,
}

/// An enrollment whose references have been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewEnrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

impl NewEnrollment {
    /// Attach the store-assigned identifier.
    #[must_use]
    pub fn with_id(self, enrollment_id: EnrollmentId) -> Enrollment {
        Enrollment {
            enrollment_id,
            student_id: self.student_id,
            course_id: self.course_id,
        }
    }
}
