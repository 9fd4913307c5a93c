use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber for a binary. `RUST_LOG` wins over `level` when set;
/// otherwise the library, the calling binary and request tracing log at `level`.
pub fn init_tracing(binary: &str, level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={level},{binary}={level},tower_http={level}",
                env!("CARGO_CRATE_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
