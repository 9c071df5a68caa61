use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password does not match the stored hash")]
    InvalidPassword,
    #[error("X-User-ID header was not provided")]
    MissingIdentity,
    #[error("X-User-ID header {header} does not match session user ID {session}")]
    IdentityMismatch { header: i32, session: i32 },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication error: {}", self);

        let message = match self {
            Self::InvalidPassword => "Invalid password",
            Self::MissingIdentity => "Unauthorized: user ID not provided",
            Self::IdentityMismatch { .. } => "Unauthorized: user ID does not match session",
        };

        error_response(StatusCode::UNAUTHORIZED, message)
    }
}
