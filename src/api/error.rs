use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Failures reported to the browser as `{"error": "..."}`.
///
/// The messages are part of the contract with the game page. The upstream
/// detail behind a 500 is logged by the handler, never sent to the client.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Not enough top artists to play the game.")]
    NotEnoughArtists,

    #[error("No access token. Please log in again.")]
    NoAccessToken,

    #[error("Missing artist.")]
    MissingArtist,

    #[error("Failed to fetch top artists.")]
    FetchTopArtists,

    #[error("Failed to start game.")]
    StartGame,

    #[error("Failed to generate lyric.")]
    GenerateLyric,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            Self::NotEnoughArtists | Self::MissingArtist => StatusCode::BAD_REQUEST,
            Self::NoAccessToken => StatusCode::FORBIDDEN,
            Self::FetchTopArtists | Self::StartGame | Self::GenerateLyric => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
