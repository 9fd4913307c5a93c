//! export-pdf – composed resume HTML → A4 PDF via headless Chromium.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use ats_resume::export::ChromiumExporter;
use ats_resume::pipeline::export_pdf_file;
use ats_resume::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "export-pdf", version, about = "Print a composed resume HTML file to PDF")]
struct Args {
    /// HTML produced by `render`
    #[arg(short, long, default_value = "dist/cv.html")]
    input: PathBuf,

    /// Output PDF path (parent directories are created)
    #[arg(short, long, default_value = "dist/cv.pdf")]
    out: PathBuf,

    /// Chromium or Chrome executable
    #[arg(long, env = "CHROMIUM_BIN", default_value = "chromium")]
    chromium: PathBuf,

    /// Pass --no-sandbox to Chromium (needed as root in most containers)
    #[arg(long, env = "CHROMIUM_NO_SANDBOX")]
    no_sandbox: bool,

    #[arg(long, env = "EXPORT_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(
        env!("CARGO_CRATE_NAME"),
        if args.verbose { "debug" } else { "info" },
    );

    let exporter = ChromiumExporter::new(&args.chromium, Duration::from_secs(args.timeout_secs), 1)
        .with_no_sandbox(args.no_sandbox);

    export_pdf_file(&exporter, &args.input, &args.out).await?;
    Ok(())
}
