//! Enrollment HTTP Routes
//!
//! - `GET /enrollments/:enrollment_id`
//! - `POST /enrollments`
//!
//! Unknown course or student references on create answer 404, not 400.

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
use crate::domain::enrollment::{Enrollment, EnrollmentDraft};
use crate::domain::id::EnrollmentId;
use crate::port::outbound::store::RecordStore;

pub const NOT_FOUND: &str = "Enrollment not found";
pub const CREATED: &str = "Enrollment created successfully";

#[derive(Debug, Serialize)]
pub struct EnrollmentCreated {
    pub message: &'static str,
    pub enrollment_id: EnrollmentId,
}

/// Create enrollment routes
pub fn enrollment_routes<S: RecordStore + 'static>() -> Router<Arc<RecordService<S>>> {
    Router::new()
        .route(
            "/enrollments",
            get(list_enrollments).post(create_enrollment::<S>),
        )
        .route("/enrollments/:enrollment_id", get(get_enrollment::<S>))
}

async fn list_enrollments() -> ApiError {
    ApiError::NotFound(NOT_FOUND)
}

async fn get_enrollment<S: RecordStore>(
    State(records): State<Arc<RecordService<S>>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Enrollment>> {
    let id: EnrollmentId = raw_id.parse().map_err(|_| ApiError::NotFound(NOT_FOUND))?;
    let enrollment = records
        .enrollment(id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(enrollment))
}

async fn create_enrollment<S: RecordStore>(
    State(records): State<Arc<RecordService<S>>>,
    payload: Result<Json<EnrollmentDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<EnrollmentCreated>)> {
    let Json(draft) = payload?;
    let enrollment = records.create_enrollment(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(EnrollmentCreated {
            message: CREATED,
            enrollment_id: enrollment.enrollment_id,
        }),
    ))
}
