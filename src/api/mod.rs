//! # API Module
//!
//! HTTP route handlers of the Lyric Quiz server.
//!
//! ## Endpoints
//!
//! ### Pages
//!
//! - [`index`] - `GET /`, landing page with the Spotify login link
//! - [`game_page`] - `GET /game`, game page; redirects to `/` until the session
//!   holds top artists
//!
//! ### Authentication
//!
//! - [`login`] - `GET /login`, redirects to Spotify's authorize endpoint
//! - [`callback`] - `GET /callback`, exchanges the code, reads top artists and
//!   fills the session
//!
//! ### Game
//!
//! - [`start_game`] - `GET /start-game`, `{lyric, options, correctArtist}`
//! - [`top_artists`] - `GET /api/top-artists`, refreshes `{topArtists}`
//! - [`generate_lyric`] - `POST /api/generate-lyric`, `{lyric}` for `{artist}`
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`, status and version
//!
//! ## Errors
//!
//! JSON endpoints fail with [`ApiError`], rendered as `{"error": "..."}` with a
//! fixed message per route. The callback fails with a plain-text page.
//! Upstream detail only goes to the server log.
//!
//! ## Redirects
//!
//! Redirects answer `302 Found`, see [`found`].

mod artists;
mod callback;
mod error;
mod game;
mod health;
mod lyrics;
mod pages;
mod state;

pub use artists::top_artists;
pub use callback::{AUTH_ERROR_TEXT, callback, login};
pub use error::ApiError;
pub use game::start_game;
pub use health::health;
pub use lyrics::generate_lyric;
pub use pages::{game_page, index};
pub use state::AppState;

use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

/// `302 Found` redirect to `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}
