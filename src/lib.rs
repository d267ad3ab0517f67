//! Registrar - course, student and enrollment records over HTTP.
//!
//! A small create/read service backed by SQLite. Each resource offers a
//! lookup by id and a create operation; creation runs field presence checks
//! (courses, students) or reference checks (enrollments) and reports
//! failures with a fixed set of error codes.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - Record types, identifiers and the [`ErrorCode`] taxonomy
//! - **`application`** - Validation rules and the [`RecordService`] use cases
//! - **`port`** - Store traits the application depends on
//! - **`adapter`** - SQLite store (outbound), axum routes and CLI (inbound)
//! - **`infrastructure`** - Configuration and runtime wiring
//!
//! # Example
//!
//! ```no_run
//! use registrar::adapter::inbound::http::router::router;
//! use registrar::application::records::RecordService;
//! use registrar::infrastructure::bootstrap::open_store;
//!
//! # fn main() -> registrar::error::Result<()> {
//! let store = open_store(":memory:")?;
//! let app = router(RecordService::new(store));
//! # let _ = app;
//! # Ok(())
//! # }
//! ```
//!
//! [`ErrorCode`]: domain::error::ErrorCode
//! [`RecordService`]: application::records::RecordService

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
