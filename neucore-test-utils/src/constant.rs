//! Test configuration constants for EVE ESI client setup.
//!
//! These values are not real credentials, they only need to line up between the
//! mock ESI client, the mock SSO endpoints and the JWT fixtures.

/// User agent string for test ESI client requests.
pub static TEST_USER_AGENT: &str =
    "Neucore/0.1.0 (contact@example.com; +https://github.com/neucore/neucore)";

/// Mock ESI OAuth2 client ID for testing, also used as JWT audience.
pub static TEST_ESI_CLIENT_ID: &str = "esi_client_id";

/// Mock ESI OAuth2 client secret for testing.
pub static TEST_ESI_CLIENT_SECRET: &str = "esi_client_secret";

/// Mock OAuth2 callback URL for testing.
pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

/// Character owner hash used by the default JWT and character fixtures.
pub static TEST_OWNER_HASH: &str = "test-owner-hash";

/// Character name used in default JWT claims.
pub static TEST_CHARACTER_NAME: &str = "Test Character";

/// Refresh token handed out by the mock token endpoint.
pub static TEST_REFRESH_TOKEN: &str = "mock_refresh_token_value";

/// Refresh token stored by the character fixtures, rotated by a successful refresh.
pub static TEST_STORED_REFRESH_TOKEN: &str = "stored_refresh_token_value";
