//! Health check endpoint.

use axum::{extract::State, Json};

use crate::state::AppState;

/// GET /_health - machine-readable status plus the configured table name.
///
/// Reports on the process only; it does not touch the store, so listing
/// failures never affect it.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "table": state.table_name,
    }))
}
