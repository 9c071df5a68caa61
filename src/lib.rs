//! Two-sided internship marketplace: a JSON REST API over a relational store
//! and a typed client for it.

pub mod model;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "server")]
pub mod server;
