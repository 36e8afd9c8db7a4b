use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use super::AppState;
use super::handlers;

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Health (public)
        .route("/health", get(handlers::health::health_check))
        // Revocations: dry-run preview, then confirmed action
        .route("/api/v1/revocations/preview", post(handlers::revocations::preview))
        .route("/api/v1/revocations", post(handlers::revocations::confirm))
        // Audit trail (read-only)
        .route("/api/v1/audit-log", get(handlers::audit_log::list))
        .with_state(state)
}
