//! Error types for the Neucore server application.
//!
//! Domain errors (authentication, configuration, tokens, accounts) and library errors are
//! aggregated into [`Error`]. All errors implement `IntoResponse` so controllers can return
//! them directly, anything without a dedicated mapping becomes a logged 500.

pub mod account;
pub mod auth;
pub mod config;
pub mod token;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        account::AccountError, auth::AuthError, config::ConfigError, token::TokenError,
    },
};

/// Main error type for the Neucore server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, user validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Token refresher setup error.
    #[error(transparent)]
    TokenError(#[from] TokenError),
    /// Account consistency error (missing role, player or character).
    #[error(transparent)]
    AccountError(#[from] AccountError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Neucore's code.
    #[error("Internal error with Neucore's code, please open an issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// ESI client error (API requests, OAuth, JWT validation).
    #[error(transparent)]
    EsiError(#[from] eve_esi::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// IO error (binding the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - CSRF state mismatch during login
/// - 404 Not Found - No user in session or user missing from the database
/// - 500 Internal Server Error - Everything else (logged at error level)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
impl From<Error> for neucore_test_utils::TestError {
    fn from(err: Error) -> Self {
        match err {
            Error::DbErr(err) => Self::DbErr(err),
            Error::EsiError(err) => Self::EsiError(err),
            Error::SessionError(err) => Self::SessionError(err),
            err => Self::Application(err.to_string()),
        }
    }
}
