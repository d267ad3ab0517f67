//! # HTTP Router
//!
//! Combines the course, student and enrollment routers over one shared
//! [`RecordService`]. The service is the only state handlers see; build one
//! per store (tests build one per temporary database).

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use super::course::course_routes;
use super::enrollment::enrollment_routes;
use super::student::student_routes;
use crate::application::records::RecordService;
use crate::port::outbound::store::RecordStore;

/// Build the combined router for a record service.
pub fn router<S: RecordStore + 'static>(records: RecordService<S>) -> Router {
    let state = Arc::new(records);

    Router::new()
        .merge(course_routes::<S>())
        .merge(student_routes::<S>())
        .merge(enrollment_routes::<S>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
