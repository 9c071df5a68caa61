//! Typed HTTP client for the marketplace API.
//!
//! [`ApiClient`] owns the connection settings and the stored caller identity.
//! Resource facades returned by [`ApiClient::users`], [`ApiClient::students`],
//! [`ApiClient::startups`], [`ApiClient::internships`] and
//! [`ApiClient::applications`] mirror the server's route table.

pub mod api;
pub mod error;
pub mod gateway;
pub mod identity;

pub use error::ClientError;
pub use gateway::ApiClient;
pub use identity::{IdentityStore, MemoryIdentityStore};
