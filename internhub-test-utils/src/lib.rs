//! Test utilities for the internhub crate.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and
//! fixtures a test needs, then the resulting [`TestContext`] gives the test access
//! to the in-memory database, a session and fixture helpers for inserting further rows.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::marketplace::Marketplace, TestBuilder, TestContext, TestError};
}
