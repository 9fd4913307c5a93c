//! PDF export boundary: finished HTML in, PDF bytes out.
//!
//! `AppState` holds an `Arc<dyn PdfExporter>`; the default backend is
//! `ChromiumExporter`. Page parameters are fixed per exporter via
//! `PageSettings` and applied as a print stylesheet injected into the HTML.

pub mod chromium;

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::render::escape_html;

pub use chromium::ChromiumExporter;

/// Every variant is recoverable: the caller may retry with the same HTML.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to launch PDF renderer '{}': {source}", binary.display())]
    Launch {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF export timed out after {}ms", after.as_millis())]
    Timeout { after: Duration },

    #[error("PDF renderer exited with {status}: {stderr}")]
    Engine { status: String, stderr: String },

    #[error("PDF renderer produced no output")]
    EmptyOutput,

    #[error("PDF exporter is not accepting requests")]
    Unavailable,
}

#[async_trait]
pub trait PdfExporter: Send + Sync {
    /// `base_dir` is where relative URLs in `html` resolve; `None` leaves them unresolved.
    async fn export(&self, html: &str, base_dir: Option<&Path>) -> Result<Vec<u8>, ExportError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Page settings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top_in: f32,
    pub right_in: f32,
    pub bottom_in: f32,
    pub left_in: f32,
}

impl Margins {
    pub fn uniform(inches: f32) -> Self {
        Self {
            top_in: inches,
            right_in: inches,
            bottom_in: inches,
            left_in: inches,
        }
    }
}

/// Defaults: A4, backgrounds printed, 0.5in on every side.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    pub size: &'static str,
    pub print_background: bool,
    pub margins: Margins,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            size: "A4",
            print_background: true,
            margins: Margins::uniform(0.5),
        }
    }
}

impl PageSettings {
    pub fn print_css(&self) -> String {
        let m = &self.margins;
        let mut css = format!(
            "@page {{ size: {}; margin: {}in {}in {}in {}in; }}",
            self.size, m.top_in, m.right_in, m.bottom_in, m.left_in
        );
        if self.print_background {
            css.push_str(
                "\nhtml, body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }",
            );
        }
        css
    }
}

/// Injects the print stylesheet (and a `<base>` for `base_dir`) right before
/// `</head>`, or at the very start when the document has no head.
pub fn prepare_html(html: &str, page: &PageSettings, base_dir: Option<&Path>) -> String {
    let mut injected = String::new();
    if let Some(dir) = base_dir {
        let mut href = format!("file://{}", dir.display());
        if !href.ends_with('/') {
            href.push('/');
        }
        injected.push_str(&format!(r#"<base href="{}" />"#, escape_html(&href)));
    }
    injected.push_str(&format!("<style>{}</style>", page.print_css()));

    match html.to_ascii_lowercase().find("</head>") {
        Some(at) => {
            let mut out = String::with_capacity(html.len() + injected.len());
            out.push_str(&html[..at]);
            out.push_str(&injected);
            out.push_str(&html[at..]);
            out
        }
        None => format!("{injected}{html}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_settings_css() {
        assert_eq!(
            PageSettings::default().print_css(),
            "@page { size: A4; margin: 0.5in 0.5in 0.5in 0.5in; }\n\
             html, body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }"
        );
    }

    #[test]
    fn test_no_background_rule_when_disabled() {
        let page = PageSettings {
            print_background: false,
            ..PageSettings::default()
        };
        assert!(!page.print_css().contains("print-color-adjust"));
    }

    #[test]
    fn test_prepare_html_injects_before_head_close() {
        let html = "<html><HEAD><title>x</title></HEAD><body>hi</body></html>";
        let out = prepare_html(html, &PageSettings::default(), None);
        let style_at = out.find("<style>@page").unwrap();
        let head_close_at = out.find("</HEAD>").unwrap();
        assert!(style_at < head_close_at);
        assert!(out.ends_with("</HEAD><body>hi</body></html>"));
        assert!(!out.contains("<base"));
    }

    #[test]
    fn test_prepare_html_without_head_prepends() {
        let out = prepare_html("<p>hi</p>", &PageSettings::default(), None);
        assert!(out.starts_with("<style>@page"));
        assert!(out.ends_with("</style><p>hi</p>"));
    }

    #[test]
    fn test_prepare_html_adds_base_href() {
        let out = prepare_html(
            "<head></head>",
            &PageSettings::default(),
            Some(Path::new("/srv/dist")),
        );
        assert!(out.starts_with(r#"<head><base href="file:///srv/dist/" /><style>"#));
    }
}
