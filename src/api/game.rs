use axum::{Json, extract::State};
use axum_extra::extract::SignedCookieJar;

use super::{ApiError, AppState};
use crate::{game, info, openai::LyricPrompt, session, types::GameRound, warning};

/// Starts a round: samples the options, picks the correct artist and asks
/// the model for a short lyric in their style.
///
/// Nothing is stored; the browser checks the guess against `correctArtist`.
pub async fn start_game(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Json<GameRound>, ApiError> {
    let current = session::load(state.sessions.as_ref(), &jar).await;
    let top_artists = current.top_artists.unwrap_or_default();

    let draw = game::draw_round(&top_artists, state.rng.as_ref()).map_err(|e| {
        warning!("Cannot start game: {}", e);
        ApiError::NotEnoughArtists
    })?;

    info!("Artist pool for game: {:?}", draw.options);

    let lyric = state
        .lyrics
        .generate_lyric(&draw.correct_artist, LyricPrompt::ShortLyric)
        .await
        .map_err(|e| {
            warning!("Error starting game: {}", e);
            ApiError::StartGame
        })?;

    Ok(Json(GameRound {
        lyric,
        options: draw.options,
        correct_artist: draw.correct_artist,
    }))
}
