use std::sync::Arc;

use crate::config::Config;
use crate::export::PdfExporter;
use crate::render::Assets;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Template + stylesheet, loaded once at startup.
    pub assets: Arc<Assets>,
    /// Pluggable PDF backend. Default: ChromiumExporter.
    pub exporter: Arc<dyn PdfExporter>,
    pub config: Config,
}
