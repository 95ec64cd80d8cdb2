//! Shared helpers for EVE Online identifiers and ESI limits.

pub mod eve;
