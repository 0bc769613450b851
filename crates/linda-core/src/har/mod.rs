//! HAR (HTTP Archive) input: the DevTools network export, replayed entry by entry.

mod parse;

use anyhow::{Context, Result};
use std::path::Path;

use crate::request::FinishedRequest;

use parse::HarLog;

/// Reads a HAR file and returns its entries in recorded order.
///
/// An archive with no entries is valid and yields an empty list.
pub fn load_har(path: &Path) -> Result<Vec<FinishedRequest>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read HAR file: {}", path.display()))?;
    let har: HarLog = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse HAR JSON: {}", path.display()))?;
    tracing::debug!(
        entries = har.log.entries.len(),
        "loaded HAR {}",
        path.display()
    );
    Ok(har.log.entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn har_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_har_keeps_entry_order() {
        let f = har_file(
            r#"{
            "log": {
                "version": "1.2",
                "creator": { "name": "WebInspector", "version": "537.36" },
                "entries": [
                    {
                        "startedDateTime": "2024-01-01T00:00:00.000Z",
                        "request": { "method": "GET", "url": "https://www.google-analytics.com/collect?t=pageview", "headers": [] },
                        "response": { "status": 200, "headers": [] }
                    },
                    {
                        "request": {
                            "method": "POST",
                            "url": "https://www.google-analytics.com/collect",
                            "postData": { "mimeType": "text/plain", "text": "t=event&ec=video" }
                        },
                        "response": { "status": 204 }
                    }
                ]
            }
        }"#,
        );
        let entries = load_har(f.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].response.status, 200);
        assert_eq!(entries[1].request.method, "POST");
        assert_eq!(
            entries[1]
                .request
                .post_data
                .as_ref()
                .and_then(|p| p.text.as_deref()),
            Some("t=event&ec=video")
        );
    }

    #[test]
    fn load_har_empty_entries_ok() {
        let f = har_file(r#"{"log":{"version":"1.2","entries":[]}}"#);
        assert!(load_har(f.path()).unwrap().is_empty());
    }

    #[test]
    fn load_har_invalid_json_err() {
        let f = har_file("{ not json");
        let err = load_har(f.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parse HAR JSON"));
    }

    #[test]
    fn load_har_missing_file_err() {
        let err = load_har(Path::new("/nonexistent/capture.har")).unwrap_err();
        assert!(format!("{:#}", err).contains("read HAR file"));
    }
}
