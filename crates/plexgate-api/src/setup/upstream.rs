//! Shared HTTP client for the relay path

use anyhow::Result;
use plexgate_core::Config;
use std::time::Duration;

/// Build the client used for all forwarded requests.
///
/// Only the connect phase gets a timeout: relayed bodies stream for as long
/// as the client keeps reading, and a total-request timeout would sever
/// long-running media streams.
pub fn setup_upstream_client(config: &Config) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.upstream_connect_timeout_secs))
        .build()?;

    Ok(client)
}
