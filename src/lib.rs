//! Client for the Internet Archive's snapshot submission service.
//!
//! Submits a page URL to `pragma.archivelab.org` and returns the URL of the
//! stored snapshot on `web.archive.org`. No retries, no caching, no
//! authentication — a single POST per call.
//!
//! # Example
//!
//! ```rust,ignore
//! use snapsite::ArchiveClient;
//!
//! let client = ArchiveClient::new()?;
//! let snapshot_url = client.snapshot("https://example.com").await?;
//! println!("archived at {snapshot_url}");
//! ```

pub mod error;
pub mod types;

pub use error::{ArchiveError, Result};
pub use types::{ARCHIVE_API_URL, DEFAULT_TARGET_URL, WEB_ARCHIVE_PREFIX};

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use types::{SnapshotRequest, SnapshotResponse};

/// Applied to the underlying HTTP client; the service gives no deadline
/// guidance of its own.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the snapshot submission service.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http_client: Client,
    endpoint: String,
}

impl ArchiveClient {
    /// Create a client with the default request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ArchiveError::Config(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: ARCHIVE_API_URL.to_string(),
        })
    }

    /// Set a custom service endpoint (for proxies or tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Get the service endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit `url` for archival and return the snapshot URL.
    ///
    /// An empty `url` submits [`DEFAULT_TARGET_URL`] instead; no other
    /// validation is applied to the input.
    ///
    /// The future resolves exactly once, with either the snapshot URL or an
    /// error:
    ///
    /// - transport failure → [`ArchiveError::Network`]
    /// - non-2xx status → [`ArchiveError::Api`] carrying the response text
    /// - 2xx body that is not JSON → [`ArchiveError::Parse`]
    ///
    /// A 2xx JSON body missing `wayback_id` is **not** an error: the
    /// returned URL ends in the literal `undefined`.
    pub async fn snapshot(&self, url: &str) -> Result<String> {
        let target = if url.is_empty() { DEFAULT_TARGET_URL } else { url };

        let request = SnapshotRequest {
            url: target.to_string(),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Cache-Control", "no-cache")
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %target, error = %e, "snapshot request failed");
                ArchiveError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(url = %target, status = %status, error = %error_text, "snapshot service error");
            return Err(ArchiveError::Api(format!(
                "snapshot service error ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ArchiveError::Network(e.to_string()))?;

        debug!(url = %target, body = %body, "snapshot service response");

        let parsed: SnapshotResponse =
            serde_json::from_str(&body).map_err(|e| ArchiveError::Parse(e.to_string()))?;

        let wayback_id = parsed.wayback_id.as_deref().unwrap_or("undefined");
        Ok(format!("{}{}", WEB_ARCHIVE_PREFIX, wayback_id))
    }
}
