use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use super::{ApiError, AppState};
use crate::{
    info,
    openai::LyricPrompt,
    types::{GenerateLyricRequest, LyricBody},
    warning,
};

/// Writes two lines of lyrics in the style of the posted artist.
///
/// A body that is not JSON or has a non-string `artist` counts as a missing
/// artist.
pub async fn generate_lyric(
    State(state): State<AppState>,
    request: Result<Json<GenerateLyricRequest>, JsonRejection>,
) -> Result<Json<LyricBody>, ApiError> {
    let Json(request) = request.map_err(|e| {
        warning!("Rejected lyric request body: {}", e);
        ApiError::MissingArtist
    })?;

    let artist = request
        .artist
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .ok_or(ApiError::MissingArtist)?;

    info!("Generating lyric for artist: {}", artist);

    let lyric = state
        .lyrics
        .generate_lyric(&artist, LyricPrompt::TwoLines)
        .await
        .map_err(|e| {
            warning!("Error generating lyric: {}", e);
            ApiError::GenerateLyric
        })?;

    info!("Generated lyric: {}", lyric);
    Ok(Json(LyricBody { lyric }))
}
