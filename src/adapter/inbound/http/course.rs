//! Course HTTP Routes
//!
//! - `GET /courses/:course_id`
//! - `POST /courses`

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
use crate::domain::course::{Course, CourseDraft};
use crate::domain::id::CourseId;
use crate::port::outbound::store::RecordStore;

pub const NOT_FOUND: &str = "Course not found";
pub const CREATED: &str = "Course created successfully";

#[derive(Debug, Serialize)]
pub struct CourseCreated {
    pub message: &'static str,
    pub course_id: CourseId,
}

/// Create course routes
pub fn course_routes<S: RecordStore + 'static>() -> Router<Arc<RecordService<S>>> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course::<S>))
        .route("/courses/:course_id", get(get_course::<S>))
}

/// Collection listing is not offered; answer as an unknown course.
async fn list_courses() -> ApiError {
    ApiError::NotFound(NOT_FOUND)
}

async fn get_course<S: RecordStore>(
    State(records): State<Arc<RecordService<S>>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Course>> {
    let id: CourseId = raw_id.parse().map_err(|_| ApiError::NotFound(NOT_FOUND))?;
    let course = records.course(id).await?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(course))
}

async fn create_course<S: RecordStore>(
    State(records): State<Arc<RecordService<S>>>,
    payload: Result<Json<CourseDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CourseCreated>)> {
    let Json(draft) = payload?;
    let course = records.create_course(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(CourseCreated {
            message: CREATED,
            course_id: course.course_id,
        }),
    ))
}
