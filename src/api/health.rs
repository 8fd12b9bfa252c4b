use axum::{Json, extract::State};
use serde_json::{Value, json};

use super::AppState;

/// Liveness probe with the number of live sessions and the configured model.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": state.sessions.len().await,
        "model": state.settings.openai_model,
    }))
}
