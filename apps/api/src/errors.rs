use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;
use crate::models::DataError;

/// HTTP-facing error. Every variant answers `500` with `{"error": "<message>"}`,
/// the contract the editor client relies on.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(#[from] DataError),

    #[error("PDF export failed: {0}")]
    Export(#[from] ExportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidInput(e) => tracing::warn!("Rejected resume input: {e}"),
            AppError::Export(e) => tracing::error!("PDF export error: {e}"),
        }

        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
