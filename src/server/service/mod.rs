//! Business logic layer.
//!
//! Services validate request payloads, translate them into repository calls and
//! classify store failures. Missing rows are returned as `None` so controllers
//! decide which not-found message to render.

pub mod application;
pub mod internship;
pub mod startup;
pub mod student_profile;
pub mod user;

use std::str::FromStr;

use crate::{model::ParseEnumError, server::error::Error};

/// Treats empty strings like absent values.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Treats zero and negative IDs like absent values.
pub(crate) fn present_id(value: Option<i32>) -> Option<i32> {
    value.filter(|id| *id > 0)
}

/// Parses a wire value into one of the status enumerations.
///
/// The error message names `field` followed by every accepted value.
pub(crate) fn parse_enum<T>(field: &str, value: &str) -> Result<T, Error>
where
    T: FromStr<Err = ParseEnumError>,
{
    value
        .parse::<T>()
        .map_err(|err| Error::Validation(format!("{} {}", field, err)))
}
