use thiserror::Error;

/// Errors raised while setting up the SSO token refresher.
///
/// Failures of an actual refresh are not errors, they are reported through
/// [`TokenRefresh`](crate::server::service::auth::token::TokenRefresh).
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid EVE SSO token URL: {0}")]
    InvalidTokenUrl(#[from] oauth2::url::ParseError),
    #[error("Failed to build HTTP client for EVE SSO: {0}")]
    HttpClient(#[from] oauth2::reqwest::Error),
}
