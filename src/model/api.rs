use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Outcome of the most recent SSO login attempt
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResultDto {
    pub success: bool,
    pub message: String,
}
