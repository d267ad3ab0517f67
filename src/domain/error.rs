//! Rejection codes for record creation.
//!
//! Every validation or reference failure surfaced to a client carries one of
//! these codes. The set is closed: adding a code means adding a variant, and
//! every `match` over [`ErrorCode`] has to handle it.
//!
//! # Examples
//!
//! ```
//! use registrar::domain::error::{ErrorCategory, ErrorCode};
//!
//! let code = ErrorCode::Enrollment001;
//! assert_eq!(code.code(), "ENROLLMENT001");
//! assert_eq!(code.message(), "Course does not exist");
//! assert_eq!(code.category(), ErrorCategory::UnknownReference);
//! ```

use thiserror::Error;

/// Closed taxonomy of record creation failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `course_name` missing or empty.
    #[error("COURSE001: Course Name is required")]
    Course001,

    /// `course_code` missing or empty.
    #[error("COURSE002: Course Code is required")]
    Course002,

    /// `roll_number` missing or empty.
    #[error("STUDENT001: Roll Number required")]
    Student001,

    /// `first_name` missing or empty.
    #[error("STUDENT002: First Name is required")]
    Student002,

    /// Enrollment references a course that does not exist.
    #[error("ENROLLMENT001: Course does not exist")]
    Enrollment001,

    /// Enrollment references a student that does not exist.
    #[error("ENROLLMENT002: Student does not exist.")]
    Enrollment002,
}

/// Broad class of an [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required field was absent or empty.
    MissingField,
    /// A referenced record does not exist.
    UnknownReference,
}

impl ErrorCode {
    /// Stable wire identifier, e.g. `"COURSE001"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ErrorCode::Course001 => "COURSE001",
            ErrorCode::Course002 => "COURSE002",
            ErrorCode::Student001 => "STUDENT001",
            ErrorCode::Student002 => "STUDENT002",
            ErrorCode::Enrollment001 => "ENROLLMENT001",
            ErrorCode::Enrollment002 => "ENROLLMENT002",
        }
    }

    /// Human-readable message sent alongside the code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::Course001 => "Course Name is required",
            ErrorCode::Course002 => "Course Code is required",
            ErrorCode::Student001 => "Roll Number required",
            ErrorCode::Student002 => "First Name is required",
            ErrorCode::Enrollment001 => "Course does not exist",
            ErrorCode::Enrollment002 => "Student does not exist.",
        }
    }

    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            ErrorCode::Course001
            | ErrorCode::Course002
            | ErrorCode::Student001
            | ErrorCode::Student002 => ErrorCategory::MissingField,
            ErrorCode::Enrollment001 | ErrorCode::Enrollment002 => {
                ErrorCategory::UnknownReference
            }
        }
    }
}
