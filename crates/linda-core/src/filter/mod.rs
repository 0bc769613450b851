//! Filter engine: derive the displayed rows from the stored events.
//!
//! Two passes, in order:
//! 1. drop events whose tracker is excluded;
//! 2. when a text filter is set, keep events with at least one matching
//!    `key=value` pair, optionally pruning each row's details down to the
//!    matching pairs. A row pruned to nothing is dropped.
//!
//! The stored events are never touched; every call builds fresh rows.

use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

use crate::event::{EventRow, Param, TrackerEvent};
use crate::tracker::TrackerType;

/// The filter text was not a valid regular expression.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("invalid filter expression '{expression}'")]
    InvalidExpression {
        expression: String,
        #[source]
        source: regex::Error,
    },
}

/// Case-insensitive, unescaped regex built from the user's filter text.
#[derive(Debug, Clone)]
pub struct TextFilter {
    text: String,
    re: Regex,
}

impl TextFilter {
    /// `Ok(None)` for empty text, which disables the text pass entirely.
    pub fn new(text: &str) -> Result<Option<Self>, FilterError> {
        if text.is_empty() {
            return Ok(None);
        }
        let re = RegexBuilder::new(text)
            .case_insensitive(true)
            .build()
            .map_err(|source| FilterError::InvalidExpression {
                expression: text.to_string(),
                source,
            })?;
        Ok(Some(Self {
            text: text.to_string(),
            re,
        }))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn matches(&self, param: &Param) -> bool {
        self.re.is_match(&param.joined())
    }
}

/// Display toggles owned by the presenter and read at filter time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewToggles {
    /// Show only the matching pairs under each row.
    pub prune: bool,
    /// Expand the matching rows (rendering hint only).
    pub only_matched: bool,
}

/// Apply type exclusion, then the optional text filter, then annotate.
pub fn filter_events(
    events: &[TrackerEvent],
    excluded: &BTreeSet<TrackerType>,
    text_filter: Option<&TextFilter>,
    view: ViewToggles,
) -> Vec<EventRow> {
    let filter_text = text_filter.map(TextFilter::as_str).unwrap_or_default();

    events
        .iter()
        .filter(|event| !excluded.contains(&event.tracker()))
        .filter_map(|event| {
            let mut row = event.to_row();
            if let Some(filter) = text_filter {
                if view.prune {
                    row.details.retain(|p| filter.matches(p));
                }
                let any_match = event.search_params().iter().any(|p| filter.matches(p));
                if row.details.is_empty() || !any_match {
                    return None;
                }
            }
            row.filter_text = filter_text.to_string();
            row.prune = view.prune;
            row.only_matched = view.only_matched;
            Some(row)
        })
        .collect()
}
