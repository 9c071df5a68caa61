//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built by hand, verifying status
//! codes, response envelopes and the error body for every resource.

mod application;
mod internship;
mod startup;
mod student;
mod user;

use internhub_test_utils::prelude::*;

use crate::util::read_json;
