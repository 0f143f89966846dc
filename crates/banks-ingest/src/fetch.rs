//! HTTP retrieval of the ranking page.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::error::{IngestError, Result};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent string for page requests.
const USER_AGENT_VALUE: &str = concat!("banks-etl/", env!("CARGO_PKG_VERSION"));

/// Fetch `url` with a single GET and return the response body.
///
/// No retries. Transport failures and non-2xx answers are both errors.
pub fn fetch_document(url: &str) -> Result<String> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(IngestError::Client)?;

    debug!(url, "fetching document");

    let response = client
        .get(url)
        .header(USER_AGENT, USER_AGENT_VALUE)
        .send()
        .map_err(|source| IngestError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(|source| IngestError::Network {
        url: url.to_string(),
        source,
    })?;
    debug!(url, bytes = body.len(), "document fetched");
    Ok(body)
}
