//! Database connection for the host process.

use std::time::Duration;

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use url::Url;

use crate::config::DatabaseConfig;

/// Open the connection pool described by `cfg`.
///
/// # Errors
/// Returns an error if the DSN is rejected or the first connection fails.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    if let Some(n) = cfg.max_conns {
        opts.max_connections(n);
    }
    if let Some(n) = cfg.min_conns {
        opts.min_connections(n);
    }
    if let Some(secs) = cfg.acquire_timeout_secs {
        opts.acquire_timeout(Duration::from_secs(secs));
    }
    opts.sqlx_logging(false);

    let redacted = redact_credentials_in_dsn(&cfg.dsn);
    tracing::info!(dsn = %redacted, "Connecting to database");

    Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to database at {redacted}"))
}

/// Replace the password of a URL-style DSN with `***`.
///
/// DSNs that do not parse as URLs (e.g. `sqlite::memory:`) are returned as-is.
#[must_use]
pub fn redact_credentials_in_dsn(dsn: &str) -> String {
    match Url::parse(dsn) {
        Ok(mut url) if url.password().is_some() => {
            if url.set_password(Some("***")).is_ok() {
                url.to_string()
            } else {
                dsn.to_owned()
            }
        }
        _ => dsn.to_owned(),
    }
}
