use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let backend = state.api.health().await;
    if let Err(e) = &backend {
        tracing::warn!("Backend health check failed: {e}");
    }

    let backend_ok = backend.as_ref().map(|h| h.status == "healthy").unwrap_or(false);
    let status = if backend_ok { "healthy" } else { "degraded" };
    Json(json!({
        "status": status,
        "backend": backend.ok(),
        "timestamp": chrono::Utc::now(),
    }))
}
