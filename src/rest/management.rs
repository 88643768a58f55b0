use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::error;

use crate::app::AppState;

/// `GET /management/health`
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "UP", "db": "UP" }))),
        Err(e) => {
            error!("Database health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "DOWN", "db": "DOWN" })),
            )
        }
    }
}
