use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use ats_resume::config::Config;
use ats_resume::export::ChromiumExporter;
use ats_resume::render::Assets;
use ats_resume::routes::build_router;
use ats_resume::state::AppState;
use ats_resume::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    init_tracing(env!("CARGO_CRATE_NAME"), &config.rust_log);

    info!("Starting ATS resume API v{}", env!("CARGO_PKG_VERSION"));

    // Template + stylesheet are read once; a missing file aborts startup.
    let assets = Assets::load(&config.template_path(), &config.stylesheet_path())?;
    info!("Loaded template assets from {}", config.assets_dir.display());

    let exporter = ChromiumExporter::new(
        &config.chromium_bin,
        config.export_timeout,
        config.max_concurrent_exports,
    )
    .with_no_sandbox(config.chromium_no_sandbox);
    info!(
        "PDF exporter: {} (timeout {}s, max {} concurrent)",
        config.chromium_bin.display(),
        config.export_timeout.as_secs(),
        config.max_concurrent_exports
    );

    let state = AppState {
        assets: Arc::new(assets),
        exporter: Arc::new(exporter),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
