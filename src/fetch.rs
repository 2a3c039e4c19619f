//! Outbound document fetching.
//!
//! One shared [`reqwest::Client`] with a bounded timeout serves every
//! source. A fetch is a single GET with no retries, and anything other than
//! a 2xx response body is a [`SourceError::Http`].

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::SourceError;

/// Upper bound on one outbound request, connection to body.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the shared HTTP client used for all source fetches.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(FETCH_TIMEOUT).build()
}

/// Fetch a document body from `url`.
///
/// `headers` carries per-source extras such as a browser-like User-Agent
/// for upstreams that block default clients. Non-2xx statuses, timeouts,
/// and connection failures all surface uniformly as [`SourceError::Http`].
#[instrument(level = "debug", skip_all, fields(%url))]
pub async fn fetch_document(
    client: &Client,
    url: &str,
    headers: &[(String, String)],
) -> Result<String, SourceError> {
    let mut request = client.get(url);
    for (name, value) in headers {
        request = request.header(name.as_str(), value.as_str());
    }

    let response = request.send().await?.error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched document");
    Ok(body)
}
