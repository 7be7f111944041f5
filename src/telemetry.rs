// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.

use crate::config::defaults::DEFAULT_LOG_FILTER;
use crate::error::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Picks the first valid filter among the explicit ones, `RUST_LOG`, then the
/// default.
fn resolve_filter(explicit: &[Option<&str>]) -> Option<EnvFilter> {
    let env = std::env::var("RUST_LOG").ok();
    let filter = explicit
        .iter()
        .copied()
        .chain([env.as_deref(), Some(DEFAULT_LOG_FILTER)])
        .flatten()
        .find_map(|candidate| match EnvFilter::try_new(candidate) {
            Ok(filter) => Some(filter),
            Err(err) => {
                eprintln!("[WARN] Ignoring log filter '{candidate}': {err}");
                None
            }
        });
    filter
}

/// Installs the global `tracing` subscriber.
///
/// Filters are tried in order: `cli`, `config`, `RUST_LOG`, then `info`.
///
/// # Errors
///
/// Returns an error if no filter is valid or a global subscriber is already
/// installed.
pub fn init_tracing(cli: Option<&str>, config: Option<&str>) -> Result<()> {
    let filter = resolve_filter(&[cli, config])
        .ok_or_else(|| Error::Telemetry("invalid log filter".to_string()))?;

    let subscriber = Registry::default().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true),
    );
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| Error::Telemetry(err.to_string()))
}
