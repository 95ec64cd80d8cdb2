//! Factory functions for generating mock EVE SSO objects.
//!
//! The JWT fixtures are signed with a throwaway RSA key pair stored alongside this
//! module, the public half is served from the mock JWKS endpoint so `eve_esi` can
//! validate tokens exactly as it would against EVE SSO.

use std::time::Duration;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use eve_esi::model::oauth2::{EveJwtClaims, EveJwtKey, EveJwtKeys};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use oauth2::basic::BasicTokenType;
use oauth2::{AccessToken, EmptyExtraTokenFields, RefreshToken, StandardTokenResponse};
use openssl::rsa::Rsa;

use crate::constant::{TEST_CHARACTER_NAME, TEST_ESI_CLIENT_ID, TEST_REFRESH_TOKEN};

pub static RSA_KEY_ID: &str = "JWT-Signature-Key-1";

/// Create mock JWT claims without any scopes.
///
/// # Arguments
/// - `character_id` - The EVE Online character ID to include in the claims
/// - `owner_hash` - The owner hash for ownership verification
///
/// # Returns
/// - `EveJwtClaims` - JWT claims expiring 15 minutes from now
pub fn mock_jwt_claims(character_id: i64, owner_hash: &str) -> EveJwtClaims {
    mock_jwt_claims_with_scopes(character_id, owner_hash, &[])
}

/// Create mock JWT claims carrying the provided ESI scopes.
pub fn mock_jwt_claims_with_scopes(
    character_id: i64,
    owner_hash: &str,
    scopes: &[&str],
) -> EveJwtClaims {
    let now = Utc::now();
    EveJwtClaims {
        iss: "https://login.eveonline.com".to_string(),
        sub: format!("CHARACTER:EVE:{}", character_id),
        aud: vec![TEST_ESI_CLIENT_ID.to_string(), "EVE Online".to_string()],
        jti: "test_jti".to_string(),
        kid: RSA_KEY_ID.to_string(),
        tenant: "tranquility".to_string(),
        region: "world".to_string(),
        exp: now + chrono::Duration::seconds(900),
        iat: now,
        scp: scopes.iter().map(|s| s.to_string()).collect(),
        name: TEST_CHARACTER_NAME.to_string(),
        owner: owner_hash.to_string(),
        azp: TEST_ESI_CLIENT_ID.to_string(),
    }
}

/// Create the JWT key set served by the mock JWKS endpoint.
pub fn mock_jwt_keys() -> EveJwtKeys {
    let public_key = include_bytes!("./keys/public_test_rsa_key.pem");
    let rsa = Rsa::public_key_from_pem(public_key).unwrap();

    let n = URL_SAFE_NO_PAD.encode(rsa.n().to_vec());
    let e = URL_SAFE_NO_PAD.encode(rsa.e().to_vec());

    EveJwtKeys {
        skip_unresolved_json_web_keys: false,
        keys: vec![
            EveJwtKey::RS256 {
                e,
                kid: RSA_KEY_ID.to_string(),
                kty: "RSA".to_string(),
                n,
                r#use: "sig".to_string(),
            },
            // EVE SSO also publishes an ES256 key, it is never used for signing here
            EveJwtKey::ES256 {
                crv: "P-256".to_string(),
                kid: "JWT-Signature-Key-2".to_string(),
                kty: "EC".to_string(),
                r#use: "sig".to_string(),
                x: "ITcDYJ8WVpDO4QtZ169xXUt7GB1Y6-oMKIwJ3nK1tFU".to_string(),
                y: "ZAJr0f4V2Eu7xBgLMgQBdJ2DZ2mp8JykOhX4XgU_UEY".to_string(),
            },
        ],
    }
}

/// Sign the claims and wrap them in a token response as returned by the SSO token endpoint.
///
/// The response expires in one hour and carries [`TEST_REFRESH_TOKEN`].
pub fn mock_jwt_token(
    claims: &EveJwtClaims,
) -> StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType> {
    let private_key = include_bytes!("./keys/private_test_rsa_key.pem");
    let encoding_key = EncodingKey::from_rsa_pem(private_key).unwrap();

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(RSA_KEY_ID.to_string());

    let access_token_secret = encode(&header, claims, &encoding_key).unwrap();

    let mut token = StandardTokenResponse::new(
        AccessToken::new(access_token_secret),
        BasicTokenType::Bearer,
        EmptyExtraTokenFields {},
    );
    token.set_expires_in(Some(&Duration::from_secs(3600)));
    token.set_refresh_token(Some(RefreshToken::new(TEST_REFRESH_TOKEN.to_string())));

    token
}
