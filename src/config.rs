//! Configuration management for the Lyric Quiz server.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify and OpenAI credentials, upstream endpoints,
//! session behaviour and server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use chrono::TimeDelta;

use crate::{Res, errors::ConfigError};

/// OAuth scope requested from Spotify. Top artists is all the game reads.
pub const SPOTIFY_SCOPE: &str = "user-top-read";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7768;
pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Loads environment variables from `.env` files.
///
/// A `.env` in the working directory is read first, then the one in the
/// platform-specific local data directory under `lyricquiz/.env`. Variables
/// that are already set are never overwritten, so the real environment wins.
///
/// # Directory Structure
///
/// The data directory file is looked up in:
/// - Linux: `~/.local/share/lyricquiz/.env`
/// - macOS: `~/Library/Application Support/lyricquiz/.env`
/// - Windows: `%LOCALAPPDATA%/lyricquiz/.env`
///
/// Both files are optional.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Res<()> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.into()),
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lyricquiz/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

/// Runtime settings of the server.
///
/// Built once at startup from the environment and shared read-only by every
/// request handler.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_redirect_uri: String,
    pub spotify_auth_url: String,
    pub spotify_token_url: String,
    pub spotify_api_url: String,
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub openai_model: String,
    /// Secret the session cookie signing key is derived from. A random key is
    /// used when unset.
    pub session_secret: Option<String>,
    /// Idle lifetime of a server-side session. `None` keeps sessions until
    /// the process exits.
    pub session_ttl_secs: Option<i64>,
    pub public_dir: PathBuf,
}

impl Settings {
    /// Creates settings with the three required credentials and defaults for
    /// everything else.
    pub fn new(
        spotify_client_id: impl Into<String>,
        spotify_client_secret: impl Into<String>,
        openai_api_key: impl Into<String>,
    ) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            spotify_client_id: spotify_client_id.into(),
            spotify_client_secret: spotify_client_secret.into(),
            spotify_redirect_uri: default_redirect_uri(DEFAULT_PORT),
            spotify_auth_url: DEFAULT_SPOTIFY_AUTH_URL.to_string(),
            spotify_token_url: DEFAULT_SPOTIFY_TOKEN_URL.to_string(),
            spotify_api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            openai_api_key: openai_api_key.into(),
            openai_api_url: DEFAULT_OPENAI_API_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            session_secret: None,
            session_ttl_secs: Some(DEFAULT_SESSION_TTL_SECS),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }

    /// Reads settings from the process environment.
    ///
    /// # Required Variables
    ///
    /// - `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` - Spotify app credentials
    /// - `OPENAI_API_KEY` - key for the chat-completion API
    ///
    /// # Optional Variables
    ///
    /// - `SERVER_HOST`, `PORT` - listener address (default `0.0.0.0:7768`)
    /// - `SPOTIFY_REDIRECT_URI` - defaults to `http://localhost:{PORT}/callback`
    /// - `SPOTIFY_API_AUTH_URL`, `SPOTIFY_API_TOKEN_URL`, `SPOTIFY_API_URL`
    /// - `OPENAI_API_URL`, `OPENAI_MODEL`
    /// - `SESSION_SECRET`, `SESSION_TTL_SECS` (`0` disables expiry)
    /// - `PUBLIC_DIR` - directory holding `index.html` and `game.html`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a numeric
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let mut settings = Self::new(
            require("SPOTIFY_CLIENT_ID")?,
            require("SPOTIFY_CLIENT_SECRET")?,
            require("OPENAI_API_KEY")?,
        );

        if let Some(host) = get("SERVER_HOST") {
            settings.host = host;
        }
        if let Some(port) = get("PORT") {
            settings.port = parse_number("PORT", &port)?;
        }
        settings.spotify_redirect_uri =
            get("SPOTIFY_REDIRECT_URI").unwrap_or_else(|| default_redirect_uri(settings.port));
        if let Some(url) = get("SPOTIFY_API_AUTH_URL") {
            settings.spotify_auth_url = url;
        }
        if let Some(url) = get("SPOTIFY_API_TOKEN_URL") {
            settings.spotify_token_url = url;
        }
        if let Some(url) = get("SPOTIFY_API_URL") {
            settings.spotify_api_url = url;
        }
        if let Some(url) = get("OPENAI_API_URL") {
            settings.openai_api_url = url;
        }
        if let Some(model) = get("OPENAI_MODEL") {
            settings.openai_model = model;
        }
        settings.session_secret = get("SESSION_SECRET");
        if let Some(ttl) = get("SESSION_TTL_SECS") {
            let secs: i64 = parse_number("SESSION_TTL_SECS", &ttl)?;
            if secs < 0 {
                return Err(ConfigError::Invalid {
                    name: "SESSION_TTL_SECS",
                    value: ttl,
                    reason: "must not be negative".to_string(),
                });
            }
            if TimeDelta::try_seconds(secs).is_none() {
                return Err(ConfigError::Invalid {
                    name: "SESSION_TTL_SECS",
                    value: ttl,
                    reason: "too large for a session lifetime".to_string(),
                });
            }
            settings.session_ttl_secs = (secs > 0).then_some(secs);
        }
        if let Some(dir) = get("PUBLIC_DIR") {
            settings.public_dir = PathBuf::from(dir);
        }

        Ok(settings)
    }

    /// Moves the listener to another port.
    ///
    /// A redirect URI that was derived from the old port follows along; an
    /// explicitly configured one is left alone.
    pub fn set_port(&mut self, port: u16) {
        if self.spotify_redirect_uri == default_redirect_uri(self.port) {
            self.spotify_redirect_uri = default_redirect_uri(port);
        }
        self.port = port;
    }

    /// Returns the `host:port` string the listener binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    ///
    /// Follows the scheme of the public callback URL, so a plain-http local
    /// setup keeps working.
    pub fn secure_cookies(&self) -> bool {
        self.spotify_redirect_uri.starts_with("https://")
    }
}

/// Callback URL used when `SPOTIFY_REDIRECT_URI` is not set.
pub fn default_redirect_uri(port: u16) -> String {
    format!("http://localhost:{port}/callback")
}

fn parse_number<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
