//! Typed session data.
//!
//! Each submodule wraps one session key so handlers never touch raw keys. Reading
//! (`get`) and writing (`insert`/`remove`) are separate calls: services that only need
//! to know who is logged in never mutate the session.

pub mod auth;
pub mod character;
pub mod result;
