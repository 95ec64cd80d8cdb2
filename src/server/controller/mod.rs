//! HTTP controller endpoints for the Neucore web API.
//!
//! Controllers read the session, call services and convert their results into responses.
//! Errors are returned as [`crate::server::error::Error`] and converted by its
//! `IntoResponse` implementation.

pub mod auth;
pub mod user;
pub mod util;
