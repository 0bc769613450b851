//! Newline-delimited JSON stream for live mode.
//!
//! Each line is either one DevTools `onRequestFinished` payload / HAR entry,
//! or a control record such as `{"control":"filter","text":"play"}` standing
//! in for the panel's buttons, checkboxes and filter box.

use crate::request::FinishedRequest;
use crate::session::Control;

/// One parsed NDJSON line.
#[derive(Debug)]
pub enum StreamRecord {
    Request(FinishedRequest),
    Control(Control),
}

/// Parse one line. Blank lines are skipped (`Ok(None)`).
///
/// An object with a `control` key is a control record; anything else must be
/// a finished request.
pub fn parse_ndjson_line(line: &str) -> Result<Option<StreamRecord>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value = serde_json::from_str(line)?;
    let record = if value.get("control").is_some() {
        StreamRecord::Control(serde_json::from_value(value)?)
    } else {
        StreamRecord::Request(serde_json::from_value(value)?)
    };
    Ok(Some(record))
}
