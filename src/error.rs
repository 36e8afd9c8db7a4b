use thiserror::Error;

use crate::core::ReconcileError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Revocation list is empty")]
    EmptyRequest,

    #[error("Invalid IP addresses: {}", .0.join(", "))]
    InvalidAddresses(Vec<String>),

    #[error("Audit ledger write failed: {0}")]
    LedgerWrite(#[source] sqlx::Error),

    #[error("Audit ledger read failed: {0}")]
    LedgerRead(#[source] sqlx::Error),

    #[error("Report generation failed: {0}")]
    Report(String),
}

impl From<ReconcileError> for AppError {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::EmptyRequest => AppError::EmptyRequest,
            ReconcileError::InvalidAddresses(entries) => AppError::InvalidAddresses(entries),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;
        use serde_json::json;

        let status = match &self {
            AppError::EmptyRequest | AppError::InvalidAddresses(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            AppError::InvalidAddresses(entries) => {
                json!({ "error": self.to_string(), "invalid_entries": entries })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
