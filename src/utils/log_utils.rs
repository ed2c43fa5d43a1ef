use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` overrides the default filter. Records emitted through the `log`
/// macros are forwarded to the same subscriber.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}
