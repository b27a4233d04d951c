//! Process-wide `tracing` subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LoggingConfig};

const FALLBACK_DIRECTIVE: &str = "info";

/// Build the filter: `RUST_LOG` wins, then the configured level.
fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Install the global subscriber.
///
/// # Errors
/// Returns an error if a global subscriber is already set.
pub fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(build_filter(cfg));

    match cfg.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_falls_back() {
        let cfg = LoggingConfig {
            level: "not a directive[".to_owned(),
            format: LogFormat::Text,
        };
        // Must not panic; RUST_LOG may or may not be set in CI.
        let _filter = build_filter(&cfg);
    }
}
