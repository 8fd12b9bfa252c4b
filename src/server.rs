use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};
use tower_http::services::ServeDir;

use crate::{api, api::AppState, config::Settings, error, info, success, warning};

/// Assembles the router for all routes on top of `state`.
///
/// Paths without a route fall through to the static files of the public
/// directory.
pub fn router(state: AppState) -> Router {
    let public = ServeDir::new(&state.settings.public_dir);

    Router::new()
        .route("/", get(api::index))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/game", get(api::game_page))
        .route("/start-game", get(api::start_game))
        .route("/api/top-artists", get(api::top_artists))
        .route("/api/generate-lyric", post(api::generate_lyric))
        .route("/health", get(api::health))
        .fallback_service(public)
        .with_state(state)
}

/// Binds the listener and serves until the process is stopped.
///
/// Startup failures (unbuildable HTTP client, unparsable address, port in
/// use) print an error and exit with status 1.
pub async fn start_api_server(settings: Settings, open_browser: bool) {
    let addr = match SocketAddr::from_str(&settings.server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };
    let port = settings.port;

    let state = match AppState::from_settings(settings) {
        Ok(state) => state,
        Err(e) => error!("Failed to build HTTP client: {}", e),
    };
    if state.settings.session_secret.is_none() {
        warning!("SESSION_SECRET is not set, using a random cookie key for this run");
    }

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    let local_url = format!("http://localhost:{port}");
    success!("Server is running on {}", local_url);
    info!("Spotify callback: {}", state.settings.spotify_redirect_uri);

    if open_browser && webbrowser::open(&local_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            local_url
        )
    }

    if let Err(e) = axum::serve(listener, router(state)).await {
        error!("Server stopped: {}", e);
    }
}
