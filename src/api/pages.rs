use std::path::Path;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::SignedCookieJar;

use super::{AppState, found};
use crate::{session, warning};

pub const INDEX_PAGE: &str = "index.html";
pub const GAME_PAGE: &str = "game.html";

/// Landing page with the login link.
pub async fn index(State(state): State<AppState>) -> Response {
    serve_page(&state.settings.public_dir, INDEX_PAGE).await
}

/// Game page, only for players whose top artists are in the session.
pub async fn game_page(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let current = session::load(state.sessions.as_ref(), &jar).await;
    if current.top_artists.is_none() {
        return found("/");
    }

    serve_page(&state.settings.public_dir, GAME_PAGE).await
}

async fn serve_page(public_dir: &Path, name: &str) -> Response {
    match async_fs::read_to_string(public_dir.join(name)).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warning!("Cannot read {} from {}: {}", name, public_dir.display(), e);
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}
