//! Persistence ports for course, student and enrollment records.
//!
//! Each insert commits on its own; there is no batching and no
//! multi-record transaction. Store faults are returned as errors and never
//! retried.

use std::future::Future;

use crate::domain::course::{Course, NewCourse};
use crate::domain::enrollment::{Enrollment, NewEnrollment};
use crate::domain::id::{CourseId, EnrollmentId, StudentId};
use crate::domain::student::{NewStudent, Student};
use crate::error::Result;

/// Storage operations for courses.
pub trait CourseStore: Send + Sync {
    /// Get a course by ID.
    fn get_course(&self, id: CourseId) -> impl Future<Output = Result<Option<Course>>> + Send;

    /// Insert a course and return it with its assigned ID.
    fn insert_course(&self, course: NewCourse) -> impl Future<Output = Result<Course>> + Send;

    /// Whether a course with this ID exists.
    fn course_exists(&self, id: CourseId) -> impl Future<Output = Result<bool>> + Send;
}

/// Storage operations for students.
pub trait StudentStore: Send + Sync {
    /// Get a student by ID.
    fn get_student(&self, id: StudentId) -> impl Future<Output = Result<Option<Student>>> + Send;

    /// Insert a student and return it with its assigned ID.
    fn insert_student(&self, student: NewStudent) -> impl Future<Output = Result<Student>> + Send;

    /// Whether a student with this ID exists.
    fn student_exists(&self, id: StudentId) -> impl Future<Output = Result<bool>> + Send;
}

/// Storage operations for enrollments.
pub trait EnrollmentStore: Send + Sync {
    /// Get an enrollment by ID.
    fn get_enrollment(
        &self,
        id: EnrollmentId,
    ) -> impl Future<Output = Result<Option<Enrollment>>> + Send;

    /// Insert an enrollment and return it with its assigned ID.
    fn insert_enrollment(
        &self,
        enrollment: NewEnrollment,
    ) -> impl Future<Output = Result<Enrollment>> + Send;
}

/// A store holding all three record kinds.
pub trait RecordStore: CourseStore + StudentStore + EnrollmentStore {}

impl<T> RecordStore for T where T: CourseStore + StudentStore + EnrollmentStore {}
