use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration failures raised by `Config::from_vars`
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `DATABASE_URL` nor the named `PG*` fallback variable is set
    #[error("{0} is not set and DATABASE_URL was not provided")]
    MissingEnvVar(String),
    /// A port variable did not parse as a `u16`
    #[error("{var} must be a valid port number: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
