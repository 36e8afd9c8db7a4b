use anyhow::Result;
use tracing::info;

mod api;
mod config;
mod core;
mod db;
mod error;
mod report;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("allowgate=info".parse()?)
        )
        .init();

    info!("Starting Allowgate v{}", env!("CARGO_PKG_VERSION"));

    let cfg = config::load()?;
    info!("Configuration loaded");

    let db_pool = db::init(&cfg).await?;
    info!("Audit store initialized");

    api::serve(cfg, db_pool).await?;

    Ok(())
}
