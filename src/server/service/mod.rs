//! Business logic services.
//!
//! Services orchestrate repositories and outbound ESI/SSO calls. Network calls are made
//! outside of database transactions, writes for one unit of work are committed together.

pub mod account;
pub mod auth;
pub mod eve;
pub mod group;
