use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LoggingConfig;

const VERBOSE_DIRECTIVE: &str = "debug";

/// Initializes the global tracing subscriber.
///
/// Logs go to stderr so rendered destinations on stdout stay machine readable.
/// `verbose` forces debug output; otherwise `RUST_LOG` takes precedence over
/// the configured level.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(config, verbose, env);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow!("Invalid log filter '{directive}': {e}"))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}

/// Verbose flag first, then the environment, then the configured level
fn filter_directive(config: &LoggingConfig, verbose: bool, env: Option<String>) -> String {
    if verbose {
        return VERBOSE_DIRECTIVE.to_string();
    }
    env.filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| config.level.clone())
}
