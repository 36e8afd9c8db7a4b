use axum::{extract::State, Json};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::AppState;
use crate::core::{self, Delimiter, Reconciliation};
use crate::db::audit;
use crate::error::AppResult;
use crate::report::{self, Locale};

#[derive(Debug, Deserialize)]
pub struct RevocationRequest {
    /// Name of the uploaded allow-list file; artifact names derive from it.
    pub file_name: String,
    /// Raw UTF-8 content of the uploaded allow-list.
    pub content: String,
    #[serde(default)]
    pub delimiter: Delimiter,
    /// Free-form revoke field: entries separated by commas or line breaks.
    pub revoke_list: String,
    #[serde(default)]
    pub locale: Locale,
    /// Identity to attribute the ledger row to. Falls back to the
    /// configured default actor; a real identity provider would fill
    /// this from the authenticated session.
    pub actor_id: Option<String>,
}

fn reconcile_request(body: &RevocationRequest) -> AppResult<Reconciliation> {
    let original = core::parse(&body.content, body.delimiter);
    let requested = core::parse_revoke_list(&body.revoke_list);
    Ok(core::reconcile(&original, &requested)?)
}

/// Dry run: parse, validate and reconcile without touching the ledger,
/// so the operator sees what a confirm would remove.
pub async fn preview(
    State(_state): State<Arc<AppState>>,
    Json(body): Json<RevocationRequest>,
) -> AppResult<Json<Value>> {
    let recon = reconcile_request(&body)?;

    Ok(Json(json!({
        "original": recon.original.len(),
        "matched": recon.matched.len(),
        "retained": recon.retained.len(),
        "matched_addresses": recon.matched,
    })))
}

/// Confirmed revocation: reconcile, build both artifacts, then append the
/// ledger row. Validation failures abort before any I/O. A ledger write
/// failure does not withhold the already-computed artifacts, but it is
/// surfaced distinctly in the `audit` field so a compliance gap is never
/// silent.
pub async fn confirm(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RevocationRequest>,
) -> AppResult<Json<Value>> {
    let recon = reconcile_request(&body)?;

    let retained_text = core::serialize(&recon.retained);
    let pdf = report::render(&recon, body.locale)?;

    let base = base_name(&body.file_name);
    let actor = body.actor_id.as_deref().unwrap_or(&state.default_actor);

    let audit = match audit::append(
        &state.db,
        actor,
        &body.file_name,
        recon.matched.len() as u64,
    )
    .await
    {
        Ok(event) => json!({ "recorded": true, "event": event }),
        Err(err) => {
            tracing::error!("Audit ledger write failed: {err}");
            json!({ "recorded": false, "error": err.to_string() })
        }
    };

    Ok(Json(json!({
        "summary": {
            "original": recon.original.len(),
            "matched": recon.matched.len(),
            "retained": recon.retained.len(),
        },
        "retained_list": {
            "file_name": format!("{base}_updated.txt"),
            "content": retained_text,
        },
        "report": {
            "file_name": format!("{base}_Audit_Report.pdf"),
            "content_type": "application/pdf",
            "locale": body.locale.code(),
            "data": BASE64.encode(&pdf),
        },
        "audit": audit,
    })))
}

fn base_name(file_name: &str) -> &str {
    file_name.strip_suffix(".txt").unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_txt_suffix() {
        assert_eq!(base_name("allowed.txt"), "allowed");
        assert_eq!(base_name("allowed"), "allowed");
        assert_eq!(base_name("allowed.csv"), "allowed.csv");
    }
}
