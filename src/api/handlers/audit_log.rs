use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::AppState;
use crate::db::audit;
use crate::error::AppResult;

/// Full revocation history, newest first. A read failure maps to a 500
/// with a distinct ledger-read error; clients treat it as a non-fatal
/// display error and keep the rest of the session.
pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    let events = audit::list_all(&state.db).await?;
    let total = events.len();
    Ok(Json(json!({ "data": events, "total": total })))
}
