//! Server application core modules.
//!
//! This module contains the backend of the marketplace: configuration, the
//! persistence bootstrap, HTTP routing, request handlers, business rules and
//! data access for users, student profiles, startups, internships and
//! applications.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
