//! Server application models.
//!
//! Application state, database model aliases with their DTO conversions, and
//! session data structures.

pub mod app;
pub mod db;
pub mod session;
