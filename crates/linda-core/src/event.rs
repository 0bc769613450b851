//! Classified tracker events and the annotated rows handed to presenters.

use serde::Serialize;

use crate::tracker::TrackerType;

/// One search parameter, in the order it appeared in the query or body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub key: String,
    pub value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `key=value`, the form the text filter matches against.
    pub fn joined(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}

/// A classified beacon. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerEvent {
    tracker: TrackerType,
    summary: String,
    search_params: Vec<Param>,
    status: u16,
}

impl TrackerEvent {
    pub fn new(tracker: TrackerType, summary: String, search_params: Vec<Param>, status: u16) -> Self {
        Self {
            tracker,
            summary,
            search_params,
            status,
        }
    }

    pub fn tracker(&self) -> TrackerType {
        self.tracker
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn search_params(&self) -> &[Param] {
        &self.search_params
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Fresh display row whose details are a full copy of the search params.
    pub(crate) fn to_row(&self) -> EventRow {
        EventRow {
            tracker: self.tracker,
            summary: self.summary.clone(),
            details: self.search_params.clone(),
            filter_text: String::new(),
            prune: false,
            only_matched: false,
        }
    }
}

/// Display copy of an event after filtering, annotated with the filter state
/// it was computed under. The annotations are rendering hints only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    #[serde(rename = "type")]
    pub tracker: TrackerType,
    pub summary: String,
    pub details: Vec<Param>,
    pub filter_text: String,
    pub prune: bool,
    pub only_matched: bool,
}
