//! File-to-file entrypoints shared by the `render` and `export-pdf` binaries.
//!
//! A missing input surfaces as an `AssetError::Missing` inside the returned
//! `anyhow::Error`, so callers can tell it apart with `downcast_ref`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::export::PdfExporter;
use crate::models::ResumeData;
use crate::render::{read_asset, AssetKind, Assets};

#[derive(Debug, Clone)]
pub struct RenderPaths {
    pub template: PathBuf,
    pub stylesheet: PathBuf,
    pub data: PathBuf,
    pub output: PathBuf,
}

/// template + stylesheet + resume JSON → composed HTML file. Returns bytes written.
pub fn render_html_file(paths: &RenderPaths) -> Result<usize> {
    let assets = Assets::load(&paths.template, &paths.stylesheet)?;
    let raw = read_asset(AssetKind::ResumeData, &paths.data)?;
    let data = ResumeData::from_json_str(&raw)
        .with_context(|| format!("Failed to parse {}", paths.data.display()))?;

    let html = assets.render(&data);
    write_output(&paths.output, html.as_bytes())?;

    info!("Rendered {} ({} bytes)", paths.output.display(), html.len());
    Ok(html.len())
}

/// Composed HTML file → PDF file. Relative URLs resolve against the input's directory.
pub async fn export_pdf_file(
    exporter: &dyn PdfExporter,
    input: &Path,
    output: &Path,
) -> Result<usize> {
    let html = read_asset(AssetKind::Html, input)?;
    let base_dir = std::fs::canonicalize(input)
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    let pdf = exporter.export(&html, base_dir.as_deref()).await?;
    write_output(output, &pdf)?;

    info!("Exported {} ({} bytes)", output.display(), pdf.len());
    Ok(pdf.len())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
