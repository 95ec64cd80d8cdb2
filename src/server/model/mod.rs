//! Server application models and type definitions.
//!
//! Application state, database model type aliases, the SSO authentication models and
//! the typed session wrappers.

pub mod app;
pub mod auth;
pub mod db;
pub mod session;
