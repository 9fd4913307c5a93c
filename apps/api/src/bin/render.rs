//! render – resume JSON + HTML template + stylesheet → one self-contained HTML file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ats_resume::pipeline::{render_html_file, RenderPaths};
use ats_resume::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "render", version, about = "Render resume JSON into a self-contained HTML document")]
struct Args {
    /// Document skeleton with {{PLACEHOLDER}} tokens
    #[arg(long, env = "RESUME_TEMPLATE", default_value = "templates/ats.html")]
    template: PathBuf,

    /// Stylesheet inlined in place of the skeleton's <link> tag
    #[arg(long, env = "RESUME_STYLESHEET", default_value = "templates/style.css")]
    stylesheet: PathBuf,

    /// ResumeData JSON file
    #[arg(long, env = "RESUME_DATA", default_value = "data/resume.example.json")]
    data: PathBuf,

    /// Output HTML path (parent directories are created)
    #[arg(short, long, default_value = "dist/cv.html")]
    out: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(
        env!("CARGO_CRATE_NAME"),
        if args.verbose { "debug" } else { "info" },
    );

    render_html_file(&RenderPaths {
        template: args.template,
        stylesheet: args.stylesheet,
        data: args.data,
        output: args.out,
    })?;
    Ok(())
}
