//! Axum route handlers for rendering and PDF export.
//!
//! Both endpoints take a raw `ResumeData` JSON body and parse it with the
//! lenient boundary rather than axum's `Json` extractor, so wrong-typed fields
//! fall back to defaults and failures keep the `{"error": …}` shape.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeData;
use crate::state::AppState;

/// POST /api/export-pdf
///
/// Renders the resume with the shared template and returns it as an A4 PDF download.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let data = ResumeData::from_json_slice(&body)?;
    let html = state.assets.render(&data);
    let pdf = state.exporter.export(&html, None).await?;

    info!(bytes = pdf.len(), "Exported resume PDF");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "attachment; filename=resume.pdf"),
        ],
        pdf,
    )
        .into_response())
}

/// POST /api/preview
///
/// Returns the composed HTML document, the same one the PDF is printed from.
pub async fn handle_preview(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let data = ResumeData::from_json_slice(&body)?;
    Ok(Html(state.assets.render(&data)))
}
