use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and default sizing profile.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "sizecharter-api",
        "default_profile": state.config.sizing_profile
    }))
}
