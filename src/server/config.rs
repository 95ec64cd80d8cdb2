//! Environment based application configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Default EVE SSO token endpoint, used for refresh grants.
pub const DEFAULT_EVE_TOKEN_URL: &str = "https://login.eveonline.com/v2/oauth/token";

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Application configuration read from `NEUCORE_*` environment variables.
pub struct Config {
    pub contact_email: String,
    pub esi_client_id: String,
    pub esi_client_secret: String,
    pub esi_callback_url: String,
    pub esi_token_url: String,
    /// ESI scopes requested on login, from the space delimited `NEUCORE_EVE_SCOPES`
    pub esi_scopes: Vec<String>,
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: SocketAddr,
    pub user_agent: String,
}

impl Config {
    /// Read the configuration from the environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let contact_email = required("NEUCORE_CONTACT_EMAIL")?;

        let bind_address_var = "NEUCORE_BIND_ADDRESS";
        let bind_address = optional(bind_address_var, DEFAULT_BIND_ADDRESS)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: bind_address_var.to_string(),
                reason: e.to_string(),
            })?;

        let user_agent = format!(
            "{}/{} ({}; +{})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            contact_email,
            env!("CARGO_PKG_REPOSITORY")
        );

        Ok(Self {
            contact_email,
            esi_client_id: required("NEUCORE_EVE_CLIENT_ID")?,
            esi_client_secret: required("NEUCORE_EVE_SECRET_KEY")?,
            esi_callback_url: required("NEUCORE_EVE_CALLBACK_URL")?,
            esi_token_url: optional("NEUCORE_EVE_TOKEN_URL", DEFAULT_EVE_TOKEN_URL),
            esi_scopes: parse_scopes(&optional("NEUCORE_EVE_SCOPES", "")),
            database_url: required("NEUCORE_DATABASE_URL")?,
            valkey_url: required("NEUCORE_VALKEY_URL")?,
            bind_address,
            user_agent,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}

fn optional(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_scopes(scopes: &str) -> Vec<String> {
    scopes.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_reported_by_name() {
        let result = required("NEUCORE_TEST_VARIABLE_THAT_IS_NEVER_SET");

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar(var)) if var == "NEUCORE_TEST_VARIABLE_THAT_IS_NEVER_SET"
        ));
    }

    #[test]
    fn optional_variable_falls_back_to_default() {
        let value = optional("NEUCORE_TEST_OPTIONAL_THAT_IS_NEVER_SET", DEFAULT_EVE_TOKEN_URL);

        assert_eq!(value, DEFAULT_EVE_TOKEN_URL);
    }

    #[test]
    fn scopes_are_split_on_whitespace() {
        let scopes = parse_scopes(" publicData  esi-mail.send_mail.v1\tesi-skills.read_skills.v1 ");

        assert_eq!(
            scopes,
            vec![
                "publicData".to_string(),
                "esi-mail.send_mail.v1".to_string(),
                "esi-skills.read_skills.v1".to_string(),
            ]
        );
    }

    #[test]
    fn empty_scopes_request_nothing() {
        assert!(parse_scopes("").is_empty());
        assert!(parse_scopes("   ").is_empty());
    }
}
