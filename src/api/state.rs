use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use reqwest::Client;

use crate::{
    config::Settings,
    game::{RandomSource, ThreadRandom},
    openai::{LyricGenerator, OpenAiClient},
    session::{MemorySessionStore, SessionStore},
    spotify::{SpotifyApi, SpotifyClient},
    utils,
};

/// Shared state for route handlers.
///
/// Every collaborator sits behind a trait object so tests can swap in fakes
/// for Spotify, the lyric model, the session store and the random source.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub spotify: Arc<dyn SpotifyApi>,
    pub lyrics: Arc<dyn LyricGenerator>,
    pub sessions: Arc<dyn SessionStore>,
    pub rng: Arc<dyn RandomSource>,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(
        settings: Arc<Settings>,
        spotify: Arc<dyn SpotifyApi>,
        lyrics: Arc<dyn LyricGenerator>,
        sessions: Arc<dyn SessionStore>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        let cookie_key = utils::cookie_key(settings.session_secret.as_deref());
        Self {
            settings,
            spotify,
            lyrics,
            sessions,
            rng,
            cookie_key,
        }
    }

    /// Wires the production collaborators: reqwest clients for Spotify and
    /// OpenAI, the in-memory session store and the thread-local generator.
    pub fn from_settings(settings: Settings) -> Result<Self, reqwest::Error> {
        let settings = Arc::new(settings);
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::new(
            Arc::clone(&settings),
            Arc::new(SpotifyClient::new(client.clone(), Arc::clone(&settings))),
            Arc::new(OpenAiClient::new(client, Arc::clone(&settings))),
            Arc::new(MemorySessionStore::from_ttl_secs(settings.session_ttl_secs)),
            Arc::new(ThreadRandom),
        ))
    }
}

// SignedCookieJar requires Key to be extractable from state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
