//! # HTTP Adapter
//!
//! Axum routes for the three record resources.
//!
//! # Endpoints
//!
//! - `GET /courses/:course_id`, `POST /courses`
//! - `GET /students/:student_id`, `POST /students`
//! - `GET /enrollments/:enrollment_id`, `POST /enrollments`

pub mod course;
pub mod enrollment;
pub mod error;
pub mod router;
pub mod student;
