use axum::{Json, extract::State};
use axum_extra::extract::SignedCookieJar;

use super::{ApiError, AppState};
use crate::{info, session, types::TopArtistsBody, warning};

/// Re-reads the player's top artists from Spotify and replaces the list in
/// the session.
pub async fn top_artists(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Json<TopArtistsBody>), ApiError> {
    let mut current = session::load(state.sessions.as_ref(), &jar).await;
    let Some(access_token) = current.access_token.clone() else {
        return Err(ApiError::NoAccessToken);
    };

    let top_artists = state
        .spotify
        .top_artists(&access_token)
        .await
        .map_err(|e| {
            warning!("Error fetching top artists: {}", e);
            ApiError::FetchTopArtists
        })?;

    info!("Refreshed {} top artists", top_artists.len());

    current.top_artists = Some(top_artists.clone());
    let (jar, _) = session::save(
        state.sessions.as_ref(),
        jar,
        current,
        state.settings.secure_cookies(),
    )
    .await;

    Ok((jar, Json(TopArtistsBody { top_artists })))
}
