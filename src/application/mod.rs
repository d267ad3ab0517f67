//! Application services (use cases).
//!
//! These services apply creation rules and coordinate the store port.

pub mod records;
pub mod validation;
