//! Outbound HTTP Client
//!
//! Every outbound call from the web tier goes through a client with both a
//! connect timeout and a whole-request timeout.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to build HTTP client: {0}")]
pub struct HttpClientError(#[from] reqwest::Error);

/// Build a `reqwest::Client` bounded by the given timeouts.
///
/// The connect timeout is clamped so it never exceeds the request timeout.
pub fn build_client(timeouts: HttpTimeouts) -> Result<reqwest::Client, HttpClientError> {
    let client = reqwest::Client::builder()
        .timeout(timeouts.request)
        .connect_timeout(timeouts.connect.min(timeouts.request))
        .build()?;
    Ok(client)
}
