use chrono::Local;
use serde::Serialize;

use crate::db::DbPool;
use crate::error::AppError;

/// Fixed action literal stored on every ledger row.
pub const REVOCATION_ACTION: &str = "Access Revocation Audit";

/// One append-only ledger row. Never updated or deleted after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEvent {
    pub id: i64,
    pub timestamp: String,
    pub action: String,
    pub user_id: Option<String>,
    pub target_file: String,
    pub ips_revoked: i64,
}

/// Append one revocation event. The ledger assigns the id (AUTOINCREMENT,
/// strictly increasing) and stamps the local clock at insert time; the
/// caller supplies neither. Returns the row as stored.
pub async fn append(
    db: &DbPool,
    actor_id: &str,
    target_file: &str,
    removed_count: u64,
) -> Result<AuditEvent, AppError> {
    let timestamp = Local::now().to_rfc3339();

    let result = sqlx::query(
        "INSERT INTO audit_events (timestamp, action, user_id, target_file, ips_revoked)
         VALUES (?, ?, ?, ?, ?)"
    )
    .bind(&timestamp)
    .bind(REVOCATION_ACTION)
    .bind(actor_id)
    .bind(target_file)
    .bind(removed_count as i64)
    .execute(db)
    .await
    .map_err(AppError::LedgerWrite)?;

    let id = result.last_insert_rowid();

    let row: (i64, String, String, Option<String>, String, i64) = sqlx::query_as(
        "SELECT id, timestamp, action, user_id, target_file, ips_revoked
         FROM audit_events WHERE id = ?"
    )
    .bind(id)
    .fetch_one(db)
    .await
    .map_err(AppError::LedgerWrite)?;

    Ok(event_from_row(row))
}

/// Full history, newest first. Timestamp ties are broken by id descending,
/// which is stable across calls.
pub async fn list_all(db: &DbPool) -> Result<Vec<AuditEvent>, AppError> {
    let rows: Vec<(i64, String, String, Option<String>, String, i64)> = sqlx::query_as(
        "SELECT id, timestamp, action, user_id, target_file, ips_revoked
         FROM audit_events ORDER BY timestamp DESC, id DESC"
    )
    .fetch_all(db)
    .await
    .map_err(AppError::LedgerRead)?;

    Ok(rows.into_iter().map(event_from_row).collect())
}

fn event_from_row(
    (id, timestamp, action, user_id, target_file, ips_revoked): (i64, String, String, Option<String>, String, i64),
) -> AuditEvent {
    AuditEvent {
        id,
        timestamp,
        action,
        user_id,
        target_file,
        ips_revoked,
    }
}
