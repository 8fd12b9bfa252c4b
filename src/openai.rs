//! Chat-completion client that writes lyrics.
//!
//! Speaks the OpenAI `/chat/completions` wire format, so any compatible
//! endpoint can be configured through `OPENAI_API_URL`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::Settings,
    errors::UpstreamError,
    types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage},
    utils,
};

pub const SYSTEM_PROMPT: &str = "You are a lyric generator in the style of famous artists.";
pub const MAX_TOKENS: u32 = 50;
pub const TEMPERATURE: f32 = 0.7;

/// What the model is asked to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LyricPrompt {
    /// Used when a round starts.
    ShortLyric,
    /// Used by the standalone lyric endpoint.
    TwoLines,
}

impl LyricPrompt {
    pub fn user_prompt(self, artist: &str) -> String {
        match self {
            Self::ShortLyric => format!("Write a short lyric in the style of {artist}."),
            Self::TwoLines => {
                format!("Write exactly 2 lines of lyrics in the style of {artist}.")
            }
        }
    }
}

#[async_trait]
pub trait LyricGenerator: Send + Sync {
    /// Returns trimmed, non-empty lyric text in the style of `artist`.
    async fn generate_lyric(
        &self,
        artist: &str,
        prompt: LyricPrompt,
    ) -> Result<String, UpstreamError>;
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    settings: Arc<Settings>,
}

impl OpenAiClient {
    pub fn new(client: Client, settings: Arc<Settings>) -> Self {
        Self { client, settings }
    }
}

/// Builds the request body for one lyric.
pub fn completion_request(
    model: &str,
    artist: &str,
    prompt: LyricPrompt,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: prompt.user_prompt(artist),
            },
        ],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

/// Pulls the text of the first choice out of a completion reply.
///
/// A reply without choices, without a message, or with blank content is
/// [`UpstreamError::MissingContent`].
pub fn extract_lyric(response: ChatCompletionResponse) -> Result<String, UpstreamError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .filter(|lyric| !lyric.is_empty())
        .ok_or(UpstreamError::MissingContent)
}

#[async_trait]
impl LyricGenerator for OpenAiClient {
    async fn generate_lyric(
        &self,
        artist: &str,
        prompt: LyricPrompt,
    ) -> Result<String, UpstreamError> {
        let api_url = format!(
            "{uri}/chat/completions",
            uri = self.settings.openai_api_url.trim_end_matches('/')
        );
        let body = completion_request(&self.settings.openai_model, artist, prompt);

        let res = self
            .client
            .post(&api_url)
            .bearer_auth(&self.settings.openai_api_key)
            .json(&body)
            .send()
            .await?;

        let reply = utils::ensure_success(res)
            .await?
            .json::<ChatCompletionResponse>()
            .await?;

        extract_lyric(reply)
    }
}
