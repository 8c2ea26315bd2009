use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a subscriber for the crate's tracing events that writes through
/// the test harness, so output is captured per test.
///
/// Filtering follows `RUST_LOG` and defaults to `warn`, which surfaces test
/// sequence misuse. Fails if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_test_writer()
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("simply logging initialized");
    Ok(())
}
