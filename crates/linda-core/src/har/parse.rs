//! Minimal HAR 1.2 structures: just enough to replay entries as finished requests.

use serde::Deserialize;

use crate::request::FinishedRequest;

/// Root HAR log (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub log: HarRoot,
}

#[derive(Debug, Deserialize)]
pub struct HarRoot {
    #[serde(default)]
    pub entries: Vec<FinishedRequest>,
}
