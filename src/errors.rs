//! Error types shared across the crate.
//!
//! Browser-facing failures live in [`crate::api::ApiError`]; this module holds
//! the errors of the layers underneath it.

use thiserror::Error;

/// Failure while talking to Spotify or the chat-completion API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport failure or a reply body that could not be decoded.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream answered {status}: {body}")]
    Status { status: u16, body: String },

    /// The completion reply carried no usable text.
    #[error("Lyric generation failed: No content in response.")]
    MissingContent,

    /// A configured endpoint could not be turned into a URL.
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Missing or malformed configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("at least two artists are needed for a round, got {0}")]
    NotEnoughArtists(usize),
}
