use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Server configuration loaded from environment variables (and `.env` if present).
/// Every variable has a default; malformed numbers abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Holds `ats.html` and `style.css`; also served under `/templates`.
    pub assets_dir: PathBuf,
    /// Served under `/data` (example resume JSON).
    pub data_dir: PathBuf,
    pub chromium_bin: PathBuf,
    pub chromium_no_sandbox: bool,
    pub export_timeout: Duration,
    pub max_concurrent_exports: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            assets_dir: PathBuf::from(env_or("ASSETS_DIR", "templates")),
            data_dir: PathBuf::from(env_or("DATA_DIR", "data")),
            chromium_bin: PathBuf::from(env_or("CHROMIUM_BIN", "chromium")),
            chromium_no_sandbox: parse_env("CHROMIUM_NO_SANDBOX", false)?,
            export_timeout: Duration::from_secs(parse_env("EXPORT_TIMEOUT_SECS", 60)?),
            max_concurrent_exports: parse_env("MAX_CONCURRENT_EXPORTS", 4)?,
        })
    }

    pub fn template_path(&self) -> PathBuf {
        self.assets_dir.join("ats.html")
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.assets_dir.join("style.css")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid value, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
