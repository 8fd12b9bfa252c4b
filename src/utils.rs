use axum_extra::extract::cookie::Key;
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha512};

use crate::errors::UpstreamError;

pub const SESSION_ID_LEN: usize = 32;

pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}

/// `Authorization` header value for HTTP Basic auth.
pub fn basic_auth_header(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}

/// Derives the cookie signing key from a configured secret.
///
/// SHA-512 yields exactly the 64 bytes the key needs, so secrets of any
/// length work. Without a secret a random key is generated.
pub fn cookie_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) => Key::from(Sha512::digest(secret.as_bytes()).as_slice()),
        None => Key::generate(),
    }
}

/// Shortens a session id for log lines.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Passes successful replies through and turns any other status into
/// [`UpstreamError::Status`] carrying the reply body for the logs.
pub async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(UpstreamError::Status {
        status: status.as_u16(),
        body,
    })
}
