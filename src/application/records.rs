//! Record use cases: look up or create courses, students and enrollments.

use tracing::{debug, info};

use crate::application::validation::{validate_course, validate_enrollment, validate_student};
use crate::domain::course::{Course, CourseDraft};
use crate::domain::enrollment::{Enrollment, EnrollmentDraft};
use crate::domain::id::{CourseId, EnrollmentId, StudentId};
use crate::domain::student::{Student, StudentDraft};
use crate::error::Result;
use crate::port::outbound::store::RecordStore;

/// Validates payloads and forwards them to a [`RecordStore`].
///
/// Holds no state of its own beyond the store handle.
pub struct RecordService<S> {
    store: S,
}

impl<S: RecordStore> RecordService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn course(&self, id: CourseId) -> Result<Option<Course>> {
        debug!(course_id = %id, "Looking up course");
        self.store.get_course(id).await
    }

    /// Validate and insert a course.
    ///
    /// # Errors
    /// A rejection code when a required field is missing, or a store error.
    pub async fn create_course(&self, draft: CourseDraft) -> Result<Course> {
        let new = validate_course(draft)?;
        let course = self.store.insert_course(new).await?;
        info!(course_id = %course.course_id, code = %course.course_code, "Course created");
        Ok(course)
    }

    pub async fn student(&self, id: StudentId) -> Result<Option<Student>> {
        debug!(student_id = %id, "Looking up student");
        self.store.get_student(id).await
    }

    /// Validate and insert a student.
    ///
    /// # Errors
    /// A rejection code when a required field is missing, or a store error.
    pub async fn create_student(&self, draft: StudentDraft) -> Result<Student> {
        let new = validate_student(draft)?;
        let student = self.store.insert_student(new).await?;
        info!(
            student_id = %student.student_id,
            roll_number = %student.roll_number,
            "Student created"
        );
        Ok(student)
    }

    pub async fn enrollment(&self, id: EnrollmentId) -> Result<Option<Enrollment>> {
        debug!(enrollment_id = %id, "Looking up enrollment");
        self.store.get_enrollment(id).await
    }

    /// Check both references and insert an enrollment.
    ///
    /// Duplicate (student, course) pairs are accepted.
    ///
    /// # Errors
    /// A rejection code when the course or student does not exist, or a
    /// store error.
    pub async fn create_enrollment(&self, draft: EnrollmentDraft) -> Result<Enrollment> {
        let new = validate_enrollment(&self.store, draft).await?;
        let enrollment = self.store.insert_enrollment(new).await?;
        info!(
            enrollment_id = %enrollment.enrollment_id,
            course_id = %enrollment.course_id,
            student_id = %enrollment.student_id,
            "Enrollment created"
        );
        Ok(enrollment)
    }
}
