//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use ward_store::PatientStore;

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Reports the serving status and which storage backend is attached.
///
/// # HTTP Request
///
/// `GET /health`
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Json<Value>
where
    S: PatientStore + Send + Sync,
{
    Json(json!({
        "status": "ok",
        "backend": state.store().backend_name(),
    }))
}
