//! EVE SSO HTTP mock endpoint creation utilities.
//!
//! Both the authorization code exchange and the refresh grant post to `/v2/oauth/token`,
//! the mocks are told apart by matching the `grant_type` in the form body.

use mockito::{Matcher, Mock};

use crate::fixtures::auth::{
    factory::{mock_jwt_claims, mock_jwt_keys, mock_jwt_token},
    AuthFixtures,
};
use eve_esi::model::oauth2::EveJwtClaims;

impl<'a> AuthFixtures<'a> {
    /// Create the mock JWKS endpoint used by `eve_esi` to validate access tokens.
    ///
    /// Keys are cached by the client, so the endpoint only has to be hit at least once.
    pub fn create_jwks_endpoint(&mut self) -> Mock {
        self.setup
            .server
            .mock("GET", "/oauth/jwks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_jwt_keys()).unwrap())
            .expect_at_least(1)
            .create()
    }

    /// Create mock HTTP endpoints for the SSO login callback.
    ///
    /// # Arguments
    /// - `claims` - Claims signed into the access token returned for the authorization code
    ///
    /// # Returns
    /// - `Mock` - The authorization code exchange endpoint
    pub fn create_code_exchange_endpoint(&mut self, claims: &EveJwtClaims) -> Mock {
        self.setup
            .server
            .mock("POST", "/v2/oauth/token")
            .match_body(Matcher::Regex("grant_type=authorization_code".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_jwt_token(claims)).unwrap())
            .create()
    }

    /// Create both the JWKS and code exchange endpoints for a character without scopes.
    pub fn create_jwt_endpoints(&mut self, character_id: i64, owner_hash: &str) -> Vec<Mock> {
        let claims = mock_jwt_claims(character_id, owner_hash);

        vec![
            self.create_jwks_endpoint(),
            self.create_code_exchange_endpoint(&claims),
        ]
    }

    /// Create a mock refresh grant endpoint returning a fresh token for the claims.
    ///
    /// # Arguments
    /// - `claims` - Claims signed into the refreshed access token
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_refresh_endpoint(
        &mut self,
        claims: &EveJwtClaims,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/v2/oauth/token")
            .match_body(Matcher::Regex("grant_type=refresh_token".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_jwt_token(claims)).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock refresh grant endpoint rejecting the refresh token with `invalid_grant`.
    pub fn create_invalid_grant_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/v2/oauth/token")
            .match_body(Matcher::Regex("grant_type=refresh_token".to_string()))
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"error":"invalid_grant","error_description":"Invalid refresh token. Token missing/expired."}"#,
            )
            .expect(expected_requests)
            .create()
    }

    /// Create a mock refresh grant endpoint failing with the provided status code.
    pub fn create_token_error_endpoint(
        &mut self,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/v2/oauth/token")
            .match_body(Matcher::Regex("grant_type=refresh_token".to_string()))
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }
}
