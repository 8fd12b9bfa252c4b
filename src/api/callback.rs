use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use super::{AppState, found};
use crate::{session, spotify::auth, success, utils, warning};

pub const AUTH_ERROR_TEXT: &str = "Error during authentication";

/// Sends the browser to Spotify's consent screen.
pub async fn login(State(state): State<AppState>) -> Response {
    match auth::authorize_url(&state.settings) {
        Ok(url) => found(url.as_str()),
        Err(e) => {
            warning!("Cannot build authorization URL: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, AUTH_ERROR_TEXT).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    code: Option<String>,
    error: Option<String>,
}

/// Completes the login.
///
/// Exchanges the code, reads the player's top artists and stores both in
/// the session before redirecting to `/game`. Any failure answers with a
/// plain-text error page; nothing is written to the session in that case.
pub async fn callback(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(params): Query<CallbackParams>,
) -> Response {
    if let Some(error) = &params.error {
        warning!("Spotify refused authorization: {}", error);
        return AUTH_ERROR_TEXT.into_response();
    }

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        warning!("Callback hit without an authorization code");
        return AUTH_ERROR_TEXT.into_response();
    };

    let token = match state.spotify.exchange_code(&code).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Error during authentication: token exchange failed: {}", e);
            return AUTH_ERROR_TEXT.into_response();
        }
    };

    let top_artists = match state.spotify.top_artists(&token.access_token).await {
        Ok(artists) => artists,
        Err(e) => {
            warning!("Error during authentication: fetching top artists failed: {}", e);
            return AUTH_ERROR_TEXT.into_response();
        }
    };
    let artist_count = top_artists.len();

    let mut current = session::load(state.sessions.as_ref(), &jar).await;
    current.access_token = Some(token.access_token);
    current.refresh_token = token.refresh_token;
    current.top_artists = Some(top_artists);

    let (jar, id) = session::save(
        state.sessions.as_ref(),
        jar,
        current,
        state.settings.secure_cookies(),
    )
    .await;

    success!(
        "Session {} logged in with {} top artists",
        utils::short_id(&id),
        artist_count
    );

    (jar, found("/game")).into_response()
}
