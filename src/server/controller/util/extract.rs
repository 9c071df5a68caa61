//! Extractors that report rejections with the uniform `{ "message": ... }` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// JSON body, malformed or mistyped payloads are a 400 validation error
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

/// Path parameters, an ID that is not an integer is a 400 validation error
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);

/// Query string, an unparsable filter value is a 400 validation error
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct ApiQuery<T>(pub T);
