//! The closed set of analytics vendors linda recognizes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tracker vendor. Variant order in [`TrackerType::ALL`] is classifier priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrackerType {
    #[serde(rename = "MMS")]
    Mms,
    #[serde(rename = "GA")]
    Ga,
    #[serde(rename = "SIFO")]
    Sifo,
    #[serde(rename = "LP")]
    Lp,
    #[serde(rename = "JTP")]
    Jtp,
    #[serde(rename = "PLY")]
    Ply,
}

impl TrackerType {
    pub const ALL: [TrackerType; 6] = [
        TrackerType::Mms,
        TrackerType::Ga,
        TrackerType::Sifo,
        TrackerType::Lp,
        TrackerType::Jtp,
        TrackerType::Ply,
    ];

    /// Short tag shown in summaries and accepted on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            TrackerType::Mms => "MMS",
            TrackerType::Ga => "GA",
            TrackerType::Sifo => "SIFO",
            TrackerType::Lp => "LP",
            TrackerType::Jtp => "JTP",
            TrackerType::Ply => "PLY",
        }
    }

    pub fn vendor(self) -> &'static str {
        match self {
            TrackerType::Mms => "comScore / Scorecard Research",
            TrackerType::Ga => "Google Analytics",
            TrackerType::Sifo => "Kantar Sifo (research-int.se)",
            TrackerType::Lp => "LinkPulse",
            TrackerType::Jtp => "Expressen JTP",
            TrackerType::Ply => "Parse.ly",
        }
    }
}

impl fmt::Display for TrackerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned when a tag does not name any known tracker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tracker type '{0}' (expected one of GA, MMS, SIFO, LP, JTP, PLY)")]
pub struct UnknownTracker(pub String);

impl FromStr for TrackerType {
    type Err = UnknownTracker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TrackerType::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTracker(s.to_string()))
    }
}
