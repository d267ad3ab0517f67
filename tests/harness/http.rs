use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use registrar::adapter::inbound::http::router::router;
use registrar::application::records::RecordService;
use serde_json::Value;
use tower::ServiceExt;

use super::temp_db::TempDb;

/// Router over a fresh temporary database.
///
/// Keep the returned [`TempDb`] alive for as long as the router is used.
pub fn test_app(name: &str) -> (Router, TempDb) {
    let db = TempDb::create(name);
    let app = router(RecordService::new(db.store()));
    (app, db)
}

/// Send one request and return the status with the decoded JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let request = builder.body(body).expect("build request");
    send_request(app, request).await
}

/// Send a prebuilt request.
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}
