//! # Spotify Integration Module
//!
//! This module talks to the two Spotify services the game needs: the accounts
//! service for the OAuth 2.0 authorization-code flow and the Web API for the
//! player's top artists.
//!
//! ## Architecture
//!
//! ```text
//! Route handlers (api)
//!          ↓
//! SpotifyApi trait  ← fakes in tests
//!          ↓
//! SpotifyClient
//!     ├── Authentication (authorize URL, code exchange)
//!     └── Artists (top artists)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Accounts / Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The server is a confidential client: it keeps the client secret and
//! authenticates the code exchange with HTTP Basic auth. The browser only
//! ever sees the authorization code, never a token.
//!
//! ### Flow Implementation
//! 1. **Authorization Request**: `/login` redirects to [`auth::authorize_url`]
//! 2. **User Authorization**: the player grants `user-top-read`
//! 3. **Callback**: Spotify redirects back to `/callback?code=...`
//! 4. **Token Exchange**: [`SpotifyApi::exchange_code`] trades the code for tokens
//! 5. **Artist Fetch**: [`SpotifyApi::top_artists`] reads the ranking
//!
//! ## Error Handling
//!
//! Every failure is returned as [`UpstreamError`] and ends the request that
//! caused it. There are no retries, no token refresh and no timeouts beyond
//! reqwest's defaults.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Authorization-code exchange
//! - `GET /me/top/artists` - Top artists, medium term, 20 entries

pub mod artists;
pub mod auth;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::{config::Settings, errors::UpstreamError, types::Token};

/// The Spotify calls the route handlers depend on.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Trades an authorization code for tokens.
    async fn exchange_code(&self, code: &str) -> Result<Token, UpstreamError>;

    /// Names of the user's top artists in ranking order.
    async fn top_artists(&self, access_token: &str) -> Result<Vec<String>, UpstreamError>;
}

/// reqwest-backed [`SpotifyApi`].
#[derive(Clone)]
pub struct SpotifyClient {
    client: Client,
    settings: Arc<Settings>,
}

impl SpotifyClient {
    pub fn new(client: Client, settings: Arc<Settings>) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn exchange_code(&self, code: &str) -> Result<Token, UpstreamError> {
        auth::exchange_code(&self.client, &self.settings, code).await
    }

    async fn top_artists(&self, access_token: &str) -> Result<Vec<String>, UpstreamError> {
        artists::get_top_artists(&self.client, &self.settings, access_token).await
    }
}
