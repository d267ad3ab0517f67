//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{course, enrollment, student};
use crate::domain::course::{Course, NewCourse};
use crate::domain::enrollment::{Enrollment, NewEnrollment};
use crate::domain::id::{CourseId, EnrollmentId, StudentId};
use crate::domain::student::{NewStudent, Student};

/// Database row for a course (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = course)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CourseRow {
    pub course_id: i32,
    pub course_name: String,
    pub course_code: String,
    pub course_description: Option<String>,
}

/// Database row for a course (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = course)]
pub struct NewCourseRow<'a> {
    pub course_name: &'a str,
    pub course_code: &'a str,
    pub course_description: Option<&'a str>,
}

/// Database row for a student (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = student)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentRow {
    pub student_id: i32,
    pub roll_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

/// Database row for a student (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = student)]
pub struct NewStudentRow<'a> {
    pub roll_number: &'a str,
    pub first_name: &'a str,
    pub last_name: Option<&'a str>,
}

/// Database row for an enrollment (queryable).
#[derive(Queryable, Selectable, Debug, Clone, Copy)]
#[diesel(table_name = enrollment)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EnrollmentRow {
    pub enrollment_id: i32,
    pub student_id: i32,
    pub course_id: i32,
}

/// Database row for an enrollment (insertable).
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = enrollment)]
pub struct NewEnrollmentRow {
    pub student_id: i32,
    pub course_id: i32,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            course_id: CourseId::new(row.course_id),
            course_name: row.course_name,
            course_code: row.course_code,
            course_description: row.course_description,
        }
    }
}

impl<'a> From<&'a NewCourse> for NewCourseRow<'a> {
    fn from(course: &'a NewCourse) -> Self {
        NewCourseRow {
            course_name: &course.course_name,
            course_code: &course.course_code,
            course_description: Some(course.course_description.as_str()),
        }
    }
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            student_id: StudentId::new(row.student_id),
            roll_number: row.roll_number,
            first_name: row.first_name,
            last_name: row.last_name,
        }
    }
}

impl<'a> From<&'a NewStudent> for NewStudentRow<'a> {
    fn from(student: &'a NewStudent) -> Self {
        NewStudentRow {
            roll_number: &student.roll_number,
            first_name: &student.first_name,
            last_name: Some(student.last_name.as_str()),
        }
    }
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment {
            enrollment_id: EnrollmentId::new(row.enrollment_id),
            student_id: StudentId::new(row.student_id),
            course_id: CourseId::new(row.course_id),
        }
    }
}

impl From<NewEnrollment> for NewEnrollmentRow {
    fn from(enrollment: NewEnrollment) -> Self {
        NewEnrollmentRow {
            student_id: enrollment.student_id.get(),
            course_id: enrollment.course_id.get(),
        }
    }
}
