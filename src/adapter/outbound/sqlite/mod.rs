//! SQLite persistence adapter.
//!
//! Implements the record store ports on top of Diesel and an r2d2 pool.

pub mod database;
pub mod store;
