use crate::server::{
    error::Error,
    model::auth::{EveAuthentication, TokenBundle},
};

/// Exchange the authorization code of an SSO callback and verify the returned token.
///
/// # Returns
/// - `Ok(EveAuthentication)` - Verified character data with the new token bundle
/// - `Err(Error::EsiError)` - Code exchange failed or the JWT could not be validated
pub async fn callback_service(
    esi_client: &eve_esi::Client,
    code: &str,
) -> Result<EveAuthentication, Error> {
    let token = esi_client.oauth2().get_token(code).await?;
    let bundle = TokenBundle::from_token_response(&token, None);

    let claims = esi_client
        .oauth2()
        .validate_token(bundle.access_token.clone())
        .await?;

    EveAuthentication::from_claims(claims, bundle)
}
