//! Creation checks for incoming records.
//!
//! Checks run in a fixed order and stop at the first failure, so a payload
//! missing several fields reports only the first one.

use crate::domain::course::{CourseDraft, NewCourse};
use crate::domain::enrollment::{EnrollmentDraft, NewEnrollment};
use crate::domain::error::ErrorCode;
use crate::domain::student::{NewStudent, StudentDraft};
use crate::error::Result;
use crate::port::outbound::store::{CourseStore, StudentStore};

/// Keep a value only if it is present and non-empty.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Validate a course payload. `course_name` is checked before `course_code`.
///
/// # Errors
/// [`ErrorCode::Course001`] or [`ErrorCode::Course002`].
pub fn validate_course(draft: CourseDraft) -> std::result::Result<NewCourse, ErrorCode> {
    let course_name = present(draft.course_name).ok_or(ErrorCode::Course001)?;
    let course_code = present(draft.course_code).ok_or(ErrorCode::Course002)?;

    Ok(NewCourse {
        course_name,
        course_code,
        course_description: draft.course_description.unwrap_or_default(),
    })
}

/// Validate a student payload. `roll_number` is checked before `first_name`.
///
/// # Errors
/// [`ErrorCode::Student001`] or [`ErrorCode::Student002`].
pub fn validate_student(draft: StudentDraft) -> std::result::Result<NewStudent, ErrorCode> {
    let roll_number = present(draft.roll_number).ok_or(ErrorCode::Student001)?;
    let first_name = present(draft.first_name).ok_or(ErrorCode::Student002)?;

    Ok(NewStudent {
        roll_number,
        first_name,
        last_name: draft.last_name.unwrap_or_default(),
    })
}

/// Check that both records an enrollment points at exist.
///
/// The course is looked up first; the student lookup only happens once the
/// course is known to exist.
///
/// # Errors
/// [`Error::Rejected`](crate::error::Error::Rejected) with
/// [`ErrorCode::Enrollment001`] or [`ErrorCode::Enrollment002`], or any store
/// error raised by the lookups.
pub async fn validate_enrollment<S>(store: &S, draft: EnrollmentDraft) -> Result<NewEnrollment>
where
    S: CourseStore + StudentStore,
{
    let course_id = match draft.course_id {
        Some(id) if store.course_exists(id).await? => id,
        _ => return Err(ErrorCode::Enrollment001.into()),
    };

    let student_id = match draft.student_id {
        Some(id) if store.student_exists(id).await? => id,
        _ => return Err(ErrorCode::Enrollment002.into()),
    };

    Ok(NewEnrollment {
        student_id,
        course_id,
    })
}
