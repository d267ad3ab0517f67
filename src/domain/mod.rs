//! Framework-free record types: courses, students, enrollments and the
//! rejection codes raised when creating them.

pub mod course;
pub mod enrollment;
pub mod error;
pub mod id;
pub mod payload;
pub mod student;
