//! Request plumbing shared by every resource facade.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    client::{error::ClientError, identity::IdentityStore},
    model::{api::ErrorDto, user::UserDto},
};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const USER_ID_HEADER: &str = "X-User-ID";
/// Navigation target handed to the unauthorized hook
pub const LOGIN_PATH: &str = "/login";

type UnauthorizedHook = Arc<dyn Fn(&str) + Send + Sync>;

/// HTTP client for the marketplace API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn IdentityStore>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn IdentityStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http: reqwest::Client::new(),
            base_url,
            store,
            on_unauthorized: None,
        }
    }

    /// Create a client for `API_BASE_URL`, falling back to [`DEFAULT_API_BASE_URL`].
    pub fn from_env(store: Arc<dyn IdentityStore>) -> Self {
        let base_url = std::env::var("API_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self::new(base_url, store)
    }

    /// Register a callback run after a 401 response has cleared the identity.
    ///
    /// The callback receives [`LOGIN_PATH`].
    pub fn on_unauthorized<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    /// The user stored by the last sign-up or login, if any
    pub fn identity(&self) -> Option<UserDto> {
        self.store.load()
    }

    pub(crate) fn store(&self) -> &dyn IdentityStore {
        self.store.as_ref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request to `path`, attaching the stored identity header.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));

        match self.store.load() {
            Some(user) => builder.header(USER_ID_HEADER, user.id.to_string()),
            None => builder,
        }
    }

    /// Send the request and decode a successful JSON body.
    ///
    /// # Returns
    /// - `Err(ClientError::Unauthorized)` - 401, the stored identity was cleared
    /// - `Err(ClientError::Api)` - Any other non-2xx status with the server's message
    /// - `Err(ClientError::Http)` - Transport or decoding failure
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let resp = request.send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::debug!("Received 401, clearing stored identity");

            self.store.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook(LOGIN_PATH);
            }

            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let message = match resp.json::<ErrorDto>().await {
                Ok(error) => error.message,
                Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
            };

            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }
}
