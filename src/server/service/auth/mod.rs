//! EVE SSO authentication services.
//!
//! Login URL generation, authorization code exchange, access token refresh and the
//! per-request [`user_auth::UserAuth`] that resolves and logs in users.

pub mod callback;
pub mod login;
pub mod token;
pub mod user_auth;
