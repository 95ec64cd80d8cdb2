//! Test fixture modules for database and HTTP mock creation.
//!
//! - `account` - players, characters, roles and groups
//! - `auth` - JWT tokens and EVE SSO endpoints
//! - `eve` - corporations, alliances and their ESI endpoints

pub mod account;
pub mod auth;
pub mod eve;
