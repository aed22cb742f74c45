//! Wire types for the snapshot submission API.

use serde::{Deserialize, Serialize};

/// Submission endpoint of the snapshot service.
pub const ARCHIVE_API_URL: &str = "https://pragma.archivelab.org";

/// Prefix joined with the returned wayback id to form the snapshot URL.
/// The id arrives with its own leading slash, so no separator is added.
pub const WEB_ARCHIVE_PREFIX: &str = "https://web.archive.org";

/// Placeholder submitted when the caller provides an empty URL.
pub const DEFAULT_TARGET_URL: &str = "https://twitter.com/sparshrestha";

/// Snapshot submission body.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotRequest {
    /// Page to archive
    pub url: String,
}

/// Snapshot service response.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotResponse {
    /// Path fragment identifying the stored snapshot on web.archive.org.
    /// The service does not guarantee its presence.
    pub wayback_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = SnapshotRequest {
            url: "http://example.com".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "url": "http://example.com" }));
    }

    #[test]
    fn test_response_with_wayback_id() {
        let response: SnapshotResponse =
            serde_json::from_str(r#"{"wayback_id": "/web/2020/http://example.com"}"#).unwrap();
        assert_eq!(
            response.wayback_id.as_deref(),
            Some("/web/2020/http://example.com")
        );
    }

    #[test]
    fn test_response_without_wayback_id() {
        let response: SnapshotResponse = serde_json::from_str("{}").unwrap();
        assert!(response.wayback_id.is_none());
    }
}
