//! Typed accessors for values stored in the server-side session.

pub mod user;
