use reqwest::{Client, Url, header::AUTHORIZATION};

use crate::{
    config::{SPOTIFY_SCOPE, Settings},
    errors::UpstreamError,
    types::Token,
    utils,
};

/// Builds the Spotify authorization URL the browser is sent to on login.
///
/// The query carries `response_type=code`, the client id, the fixed
/// `user-top-read` scope and the redirect URI, URL-encoded.
///
/// # Errors
///
/// Returns [`UpstreamError::InvalidUrl`] if the configured authorize endpoint
/// is not a valid URL.
///
/// # Example
///
/// ```
/// let url = authorize_url(&settings)?;
/// // https://accounts.spotify.com/authorize?response_type=code&client_id=...
/// ```
pub fn authorize_url(settings: &Settings) -> Result<Url, UpstreamError> {
    Url::parse_with_params(
        &settings.spotify_auth_url,
        &[
            ("response_type", "code"),
            ("client_id", settings.spotify_client_id.as_str()),
            ("scope", SPOTIFY_SCOPE),
            ("redirect_uri", settings.spotify_redirect_uri.as_str()),
        ],
    )
    .map_err(|e| UpstreamError::InvalidUrl {
        url: settings.spotify_auth_url.clone(),
        reason: e.to_string(),
    })
}

/// Exchanges an authorization code for an access token.
///
/// Completes the OAuth 2.0 authorization-code flow with the client secret:
/// the code, redirect URI and grant type are posted form-encoded and the
/// client authenticates with HTTP Basic auth built from
/// `client_id:client_secret`.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `settings` - Credentials and the token endpoint
/// * `code` - Authorization code received on the callback
///
/// # Returns
///
/// - `Ok(Token)` - Access token plus whatever else Spotify returned
/// - `Err(UpstreamError)` - Network failure, non-2xx reply or undecodable body
///
/// # Error Handling
///
/// No retry. The authorization code is single-use, so a failed exchange
/// means the player has to log in again.
pub async fn exchange_code(
    client: &Client,
    settings: &Settings,
    code: &str,
) -> Result<Token, UpstreamError> {
    let res = client
        .post(&settings.spotify_token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(
                &settings.spotify_client_id,
                &settings.spotify_client_secret,
            ),
        )
        .form(&[
            ("code", code),
            ("redirect_uri", settings.spotify_redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?;

    let token = utils::ensure_success(res).await?.json::<Token>().await?;
    Ok(token)
}
