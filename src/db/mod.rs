use anyhow::Result;
use sqlx::SqlitePool;
use std::str::FromStr;

use crate::config::Config;

pub mod audit;

pub type DbPool = SqlitePool;

pub async fn init(cfg: &Config) -> Result<DbPool> {
    let db_url = format!("sqlite://{}?mode=rwc", cfg.database.path);

    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(
            sqlx::sqlite::SqliteConnectOptions::from_str(&db_url)?
                .create_if_missing(true)
        )
        .await?;

    create_schema(&pool).await?;

    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA synchronous=NORMAL")
        .execute(&pool)
        .await?;

    tracing::info!("Audit store ready: {}", cfg.database.path);
    Ok(pool)
}

/// Idempotent schema creation. One table, so a migration runner would be
/// overkill; re-running on every startup is safe.
pub async fn create_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS audit_events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            action TEXT NOT NULL,
            user_id TEXT,
            target_file TEXT NOT NULL,
            ips_revoked INTEGER NOT NULL
        )"
    )
    .execute(pool)
    .await?;

    Ok(())
}
