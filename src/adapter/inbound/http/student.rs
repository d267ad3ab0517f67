//! Student HTTP Routes
//!
//! - `GET /students/:student_id`
//! - `POST /students`

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use crate::application::records::RecordService;
use crate::domain::id::StudentId;
use crate::domain::student::{Student, StudentDraft};
use crate::port::outbound::store::RecordStore;

pub const NOT_FOUND: &str = "Student not found";
pub const CREATED: &str = "Student created successfully";

#[derive(Debug, Serialize)]
pub struct StudentCreated {
    pub message: &'static str,
    pub student_id: StudentId,
}

/// Create student routes
pub fn student_routes<S: RecordStore + 'static>() -> Router<Arc<RecordService<S>>> {
    Router::new()
        .route("/students", get(list_students).post(create_student::<S>))
        .route("/students/:student_id", get(get_student::<S>))
}

async fn list_students() -> ApiError {
    ApiError::NotFound(NOT_FOUND)
}

async fn get_student<S: RecordStore>(
    State(records): State<Arc<RecordService<S>>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Student>> {
    let id: StudentId = raw_id.parse().map_err(|_| ApiError::NotFound(NOT_FOUND))?;
    let student = records
        .student(id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(student))
}

async fn create_student<S: RecordStore>(
    State(records): State<Arc<RecordService<S>>>,
    payload: Result<Json<StudentDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StudentCreated>)> {
    let Json(draft) = payload?;
    let student = records.create_student(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(StudentCreated {
            message: CREATED,
            student_id: student.student_id,
        }),
    ))
}
