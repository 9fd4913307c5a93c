//! Headless Chromium backend.
//!
//! Every export gets its own temporary directory (page, output file and a
//! private `--user-data-dir` profile) and its own browser process. Nothing is
//! shared between exports, so one request's navigation state or resources
//! cannot leak into another.
//!
//! The child is spawned with `kill_on_drop`: when the timeout fires or the
//! caller drops the future (client went away), only that process is killed
//! and only that directory is removed.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use crate::export::{prepare_html, ExportError, PageSettings, PdfExporter};

pub struct ChromiumExporter {
    binary: PathBuf,
    /// Arguments placed before the Chromium flags, for wrapper launchers.
    prefix_args: Vec<OsString>,
    no_sandbox: bool,
    timeout: Duration,
    page: PageSettings,
    permits: Arc<Semaphore>,
}

impl ChromiumExporter {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration, max_concurrent: usize) -> Self {
        Self {
            binary: binary.into(),
            prefix_args: Vec::new(),
            no_sandbox: false,
            timeout,
            page: PageSettings::default(),
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    pub fn with_prefix_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.prefix_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Needed when running as root inside most containers.
    pub fn with_no_sandbox(mut self, no_sandbox: bool) -> Self {
        self.no_sandbox = no_sandbox;
        self
    }

    pub fn with_page_settings(mut self, page: PageSettings) -> Self {
        self.page = page;
        self
    }

    fn args(&self, workdir: &Path, page: &Path, output: &Path) -> Vec<OsString> {
        let mut args = self.prefix_args.clone();
        args.extend(
            [
                "--headless",
                "--disable-gpu",
                "--no-first-run",
                "--no-default-browser-check",
                "--disable-extensions",
                "--hide-scrollbars",
                "--run-all-compositor-stages-before-draw",
                "--no-pdf-header-footer",
            ]
            .into_iter()
            .map(OsString::from),
        );
        if self.no_sandbox {
            args.push("--no-sandbox".into());
        }
        args.push(format!("--user-data-dir={}", workdir.join("profile").display()).into());
        args.push(format!("--print-to-pdf={}", output.display()).into());
        args.push(format!("file://{}", page.display()).into());
        args
    }

    async fn run(&self, html: &str, base_dir: Option<&Path>) -> Result<Vec<u8>, ExportError> {
        let workdir = tempfile::Builder::new().prefix("ats-resume-").tempdir()?;
        let page = workdir.path().join("page.html");
        let output = workdir.path().join("out.pdf");

        tokio::fs::write(&page, prepare_html(html, &self.page, base_dir)).await?;

        let mut command = Command::new(&self.binary);
        command
            .args(self.args(workdir.path(), &page, &output))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(binary = %self.binary.display(), "Launching PDF renderer");
        let child = command.spawn().map_err(|source| ExportError::Launch {
            binary: self.binary.clone(),
            source,
        })?;

        let finished = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("PDF renderer timed out after {}ms", self.timeout.as_millis());
                return Err(ExportError::Timeout {
                    after: self.timeout,
                });
            }
        };

        if !finished.status.success() {
            return Err(ExportError::Engine {
                status: finished.status.to_string(),
                stderr: String::from_utf8_lossy(&finished.stderr).trim().to_string(),
            });
        }

        let bytes = match tokio::fs::read(&output).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ExportError::EmptyOutput)
            }
            Err(e) => return Err(e.into()),
        };
        if bytes.is_empty() {
            return Err(ExportError::EmptyOutput);
        }

        info!(bytes = bytes.len(), "PDF export finished");
        Ok(bytes)
    }
}

#[async_trait]
impl PdfExporter for ChromiumExporter {
    async fn export(&self, html: &str, base_dir: Option<&Path>) -> Result<Vec<u8>, ExportError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| ExportError::Unavailable)?;

        let span = tracing::info_span!("pdf_export", export_id = %Uuid::new_v4());
        self.run(html, base_dir).instrument(span).await
    }
}
