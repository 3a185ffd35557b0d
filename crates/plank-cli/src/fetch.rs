//! Snapshot acquisition: network fetch or local file.

use anyhow::{Context, Result};
use plank_core::model::Snapshot;
use std::path::Path;
use tracing::debug;

/// Default ticket snapshot endpoint.
pub const DEFAULT_SNAPSHOT_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Fetch and decode the ticket/user snapshot from `url`.
///
/// # Errors
///
/// Returns an error when the request fails or the response body is not a
/// valid snapshot document.
pub fn fetch_snapshot(url: &str) -> Result<Snapshot> {
    debug!(url, "fetching snapshot");

    let response = ureq::get(url)
        .set("Accept", "application/json")
        .set("User-Agent", "plank-cli")
        .call()
        .map_err(|err| anyhow::anyhow!("snapshot request failed for {url}: {err}"))?;

    response
        .into_json::<Snapshot>()
        .context("failed to decode snapshot JSON response")
}

/// Read and decode a snapshot from a local JSON file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not contain a
/// valid snapshot document.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    debug!(path = %path.display(), "reading snapshot file");

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::read_snapshot;

    #[test]
    fn reads_feed_shaped_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("snapshot.json");
        std::fs::write(
            &path,
            r#"{
                "tickets": [
                    {"id": "CAM-1", "title": "Fix login", "tag": ["Bug"],
                     "userId": "usr-1", "status": "Todo", "priority": 4}
                ],
                "users": [
                    {"id": "usr-1", "name": "Ana", "available": false}
                ]
            }"#,
        )
        .expect("write fixture");

        let snapshot = read_snapshot(&path).expect("fixture should decode");
        assert_eq!(snapshot.tickets.len(), 1);
        assert_eq!(snapshot.tickets[0].user_id.as_deref(), Some("usr-1"));
        assert_eq!(snapshot.users[0].name, "Ana");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_snapshot(&dir.path().join("absent.json"))
            .expect_err("missing file should fail");
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ nope").expect("write");

        let err = read_snapshot(&path).expect_err("broken JSON should fail");
        assert!(err.to_string().contains("Failed to parse"));
    }
}
