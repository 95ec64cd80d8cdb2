//! Access token refresh against the EVE SSO token endpoint.
//!
//! A refresh is attempted once. Failures are reported as [`TokenRefresh`] variants rather
//! than errors so callers must tell a revoked grant apart from a transient failure.

use oauth2::{
    basic::{BasicClient, BasicErrorResponseType},
    reqwest, ClientId, ClientSecret, EndpointNotSet, EndpointSet, RefreshToken, RequestTokenError,
    TokenUrl,
};

use crate::server::{error::token::TokenError, model::auth::TokenBundle};

type SsoClient =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Outcome of [`TokenRefresher::refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRefresh {
    /// The access token has not expired, no request was made
    Current(TokenBundle),
    /// The provider issued a new token, all fields are replaced together
    Refreshed(TokenBundle),
    /// The provider rejected the refresh token with `invalid_grant`
    InvalidGrant,
    /// Any other failure, the original bundle is handed back
    Transient { fallback: TokenBundle, error: String },
}

#[derive(Clone)]
pub struct TokenRefresher {
    client: SsoClient,
    http_client: reqwest::Client,
}

impl TokenRefresher {
    /// Creates a new instance of [`TokenRefresher`]
    ///
    /// # Arguments
    /// - `client_id` - EVE developer application client ID
    /// - `client_secret` - EVE developer application secret key
    /// - `token_url` - SSO token endpoint, e.g. `https://login.eveonline.com/v2/oauth/token`
    ///
    /// # Returns
    /// - `Ok(TokenRefresher)` - Refresher ready to use
    /// - `Err(TokenError::InvalidTokenUrl)` - The token URL could not be parsed
    /// - `Err(TokenError::HttpClient)` - The HTTP client could not be built
    pub fn new(client_id: &str, client_secret: &str, token_url: &str) -> Result<Self, TokenError> {
        let client = BasicClient::new(ClientId::new(client_id.to_string()))
            .set_client_secret(ClientSecret::new(client_secret.to_string()))
            .set_token_uri(TokenUrl::new(token_url.to_string())?);

        // Following redirects would allow SSRF through the token endpoint
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            http_client,
        })
    }

    /// Return a usable access token, refreshing it if it has expired.
    pub async fn refresh(&self, token: TokenBundle) -> TokenRefresh {
        if !token.is_expired() {
            return TokenRefresh::Current(token);
        }

        let refresh_token = RefreshToken::new(token.refresh_token.clone());
        let response = self
            .client
            .exchange_refresh_token(&refresh_token)
            .request_async(&self.http_client)
            .await;

        match response {
            Ok(response) => TokenRefresh::Refreshed(TokenBundle::from_token_response(
                &response,
                Some(&token.refresh_token),
            )),
            Err(RequestTokenError::ServerResponse(response))
                if *response.error() == BasicErrorResponseType::InvalidGrant =>
            {
                TokenRefresh::InvalidGrant
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to refresh EVE SSO access token");

                TokenRefresh::Transient {
                    fallback: token,
                    error: err.to_string(),
                }
            }
        }
    }
}
