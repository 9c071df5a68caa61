use thiserror::Error;

/// Errors returned by [`ApiClient`](crate::client::ApiClient) requests.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered 401, the stored identity has been cleared.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}
