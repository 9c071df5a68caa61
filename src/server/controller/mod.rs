//! HTTP controller endpoints for the internship marketplace API.
//!
//! One module per resource. Handlers extract and hand the request to the
//! matching service, then wrap the result in the resource's response envelope.
//! Every handler is annotated for utoipa so the OpenAPI document stays in sync
//! with the routes.

pub mod application;
pub mod internship;
pub mod startup;
pub mod student;
pub mod user;
pub mod util;
