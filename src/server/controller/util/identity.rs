//! Caller identity taken from the `X-User-ID` request header.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderValue},
};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUserId,
};

pub const USER_ID_HEADER: &str = "X-User-ID";

/// ID of the user making the request
///
/// The header is required. When the request carries a session that belongs to
/// another user the header is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity(pub i32);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().cloned();

        resolve_caller(parts.headers.get(USER_ID_HEADER), session.as_ref()).await
    }
}

/// Parses the identity header and checks it against the session user, if any
///
/// # Returns
/// - `Err(AuthError::MissingIdentity)` - The header is absent
/// - `Err(Error::Validation)` - The header is not a positive integer
/// - `Err(AuthError::IdentityMismatch)` - The session belongs to a different user
pub async fn resolve_caller(
    header: Option<&HeaderValue>,
    session: Option<&Session>,
) -> Result<CallerIdentity, Error> {
    let Some(header) = header else {
        return Err(AuthError::MissingIdentity.into());
    };

    let user_id = header
        .to_str()
        .ok()
        .and_then(|value| value.trim().parse::<i32>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| Error::Validation("Invalid user ID".to_string()))?;

    if let Some(session) = session {
        if let Some(session_user_id) = SessionUserId::get(session).await? {
            if session_user_id != user_id {
                return Err(AuthError::IdentityMismatch {
                    header: user_id,
                    session: session_user_id,
                }
                .into());
            }
        }
    }

    Ok(CallerIdentity(user_id))
}
