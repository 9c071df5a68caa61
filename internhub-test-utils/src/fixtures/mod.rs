//! Fixtures for inserting database rows during test execution.
//!
//! Each submodule adds an accessor to [`TestContext`](crate::TestContext) returning
//! a fixture helper for one table, `marketplace` inserts a complete set at once.

pub mod application;
pub mod internship;
pub mod marketplace;
pub mod startup;
pub mod student_profile;
pub mod user;
