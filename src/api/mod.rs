use anyhow::Result;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::DbPool;

pub mod handlers;
pub mod router;

pub struct AppState {
    pub db: DbPool,
    /// Actor recorded on ledger rows when the request carries none.
    pub default_actor: String,
}

pub async fn serve(cfg: Config, db: DbPool) -> Result<()> {
    let bind_addr = format!("{}:{}", cfg.api.bind, cfg.api.port);
    let state = Arc::new(AppState {
        db,
        default_actor: cfg.audit.default_actor.clone(),
    });
    let cors = build_cors_layer(&cfg.api.cors_allowed_origins);
    let app = build_app(state, cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Revocation API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("No valid CORS origins configured; CORS will block all cross-origin requests");
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .merge(router::routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
