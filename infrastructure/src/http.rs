//! Shared reqwest client construction

use std::time::Duration;

/// Build a client with a fixed User-Agent and per-request timeout.
pub fn build_client(user_agent: &str, timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}
