//! Error types for the server application.
//!
//! Every handler returns `Result<_, Error>`; the `IntoResponse` implementation
//! is the single place where failures become HTTP status codes and the
//! `{ "message": ... }` body. Store failures that are not a recognised
//! constraint violation are logged and surface as a generic 500.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Main error type for the server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (bad credentials, missing or mismatched identity).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Missing or malformed input, including values outside a status enumeration.
    #[error("{0}")]
    Validation(String),
    /// The requested row, or a row it references, does not exist.
    #[error("{0}")]
    NotFound(String),
    /// A unique constraint rejected the write.
    #[error("{0}")]
    Conflict(String),
    /// Password hashing or hash parsing failed.
    #[error("Failed to process password hash: {0}")]
    PasswordHashError(String),
    /// Internal error indicating a bug rather than bad input.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl Error {
    /// Classifies a failed write by the constraint it violated.
    ///
    /// Unique violations become [`Error::Conflict`] with `conflict`, foreign key
    /// violations become [`Error::NotFound`] with `missing_reference`, anything
    /// else stays a database error.
    pub fn from_write(err: DbErr, conflict: &str, missing_reference: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!(detail = %detail, "Unique constraint violation");

                Self::Conflict(conflict.to_string())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::debug!(detail = %detail, "Foreign key constraint violation");

                Self::NotFound(missing_reference.to_string())
            }
            _ => Self::DbErr(err),
        }
    }
}

macro_rules! rejection_as_validation {
    ($($rejection:ty),+) => {
        $(
            impl From<$rejection> for Error {
                fn from(rejection: $rejection) -> Self {
                    Self::Validation(rejection.body_text())
                }
            }
        )+
    };
}

rejection_as_validation!(JsonRejection, PathRejection, QueryRejection);

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and unique constraint conflicts
/// - 401 Unauthorized - Authentication failures
/// - 404 Not Found - Missing rows
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::Validation(message) => {
                tracing::debug!("Validation error: {}", message);

                error_response(StatusCode::BAD_REQUEST, message)
            }
            Self::Conflict(message) => {
                tracing::debug!("Conflict: {}", message);

                error_response(StatusCode::BAD_REQUEST, message)
            }
            Self::NotFound(message) => {
                tracing::debug!("Not found: {}", message);

                error_response(StatusCode::NOT_FOUND, message)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            message: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    }
}
