//! Request classifier: match a finished request against the known tracker
//! signatures and build a [`TrackerEvent`] with a one-line summary.
//!
//! Signatures are tried in priority order and the first match wins. A match
//! that cannot be parsed (bad URL, missing path marker) is reported as a
//! [`ClassifyError`] so the caller can log it and move on.

mod props;

use regex::Regex;

use crate::event::{Param, TrackerEvent};
use crate::request::FinishedRequest;
use crate::tracker::TrackerType;

pub use props::{lp_action, summarize};

/// Classification failed after a signature matched, or the URL was unusable.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("invalid request URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("LinkPulse beacon without an action path segment: {0}")]
    MissingPathSegment(String),
    #[error("JTP beacon without a /notify/<type>.gif path: {0}")]
    MissingNotifyPath(String),
}

struct Signature {
    tracker: TrackerType,
    pattern: Regex,
}

/// Compiled tracker signatures, in priority order.
pub struct Classifier {
    signatures: Vec<Signature>,
    lp_segment: Regex,
}

const SIGNATURES: [(TrackerType, &str); 6] = [
    (
        TrackerType::Mms,
        r"^https?://[^/?#]*\.scorecardresearch\.com(?:[/?#:]|$)",
    ),
    (
        TrackerType::Ga,
        r"^https://www\.google-analytics\.com(?:/r)?/collect(?:[/?#]|$)",
    ),
    (
        TrackerType::Sifo,
        r"^https?://trafficgateway\.research-int\.se/",
    ),
    (TrackerType::Lp, r"^https?://[^/.]{2}\.lp4\.io/"),
    (TrackerType::Jtp, r"^https://jtp\.expressen\.se(?:[/?#:]|$)"),
    (
        TrackerType::Ply,
        r"^https?://pixel\.parsely\.com(?:[/?#:]|$)",
    ),
];

/// MMS beacons only count when the response was a plain 200.
const MMS_REQUIRED_STATUS: u16 = 200;

impl Classifier {
    pub fn new() -> Self {
        let signatures = SIGNATURES
            .iter()
            .map(|(tracker, pattern)| Signature {
                tracker: *tracker,
                pattern: Regex::new(pattern).expect("built-in tracker signature is valid"),
            })
            .collect();
        Self {
            signatures,
            lp_segment: Regex::new(r"/([a-z]+)\?").expect("built-in LinkPulse pattern is valid"),
        }
    }

    /// Which tracker signature, if any, the URL falls under.
    pub fn match_url(&self, url: &str) -> Option<TrackerType> {
        self.signatures
            .iter()
            .find(|s| s.pattern.is_match(url))
            .map(|s| s.tracker)
    }

    /// Classify one finished request.
    ///
    /// `Ok(None)` means no signature matched, or the MMS status gate rejected it.
    pub fn classify(&self, finished: &FinishedRequest) -> Result<Option<TrackerEvent>, ClassifyError> {
        let request = &finished.request;
        let status = finished.response.status;
        let url = request.url.as_str();

        let Some(tracker) = self.match_url(url) else {
            return Ok(None);
        };
        let params = request.search_params()?;

        let summary = match tracker {
            TrackerType::Mms => {
                if status != MMS_REQUIRED_STATUS {
                    tracing::debug!(status, url, "ignoring MMS beacon with non-200 status");
                    return Ok(None);
                }
                // ns_st_ad: ad type (preroll, postroll); ns_st_ty: video type.
                let kind = first(&params, "ns_st_ad").or_else(|| first(&params, "ns_st_ty"));
                let rest = pick(&params, &["ns_st_ev", "mms_campaignid", "mms_customadid"]);
                summarize(tracker, kind.into_iter().chain(rest))
            }
            TrackerType::Ga => summarize(tracker, pick(&params, &["t", "ec", "ea", "cd35", "el"])),
            TrackerType::Sifo => summarize(tracker, pick(&params, &["cp"])),
            TrackerType::Lp => {
                let segment = self
                    .lp_segment
                    .captures(url)
                    .and_then(|c| c.get(1))
                    .ok_or_else(|| ClassifyError::MissingPathSegment(url.to_string()))?;
                let action: Option<&str> = lp_action(segment.as_str());
                summarize(tracker, action.into_iter().chain(pick(&params, &["ps"])))
            }
            TrackerType::Jtp => summarize(tracker, [jtp_notify_type(url)?]),
            TrackerType::Ply => summarize(tracker, first(&params, "action")),
        };

        Ok(Some(TrackerEvent::new(tracker, summary, params, status)))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// First non-empty value for `key`.
fn first<'a>(params: &'a [Param], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|p| p.key == key)
        .map(|p| p.value.as_str())
        .filter(|v| !v.is_empty())
}

/// First values of `keys`, in key order, absent and empty ones dropped.
fn pick<'a>(params: &'a [Param], keys: &[&str]) -> Vec<&'a str> {
    keys.iter().filter_map(|k| first(params, k)).collect()
}

/// The `<type>` in `.../notify/<type>.gif`.
fn jtp_notify_type(url: &str) -> Result<&str, ClassifyError> {
    const MARKER: &str = "/notify/";
    let start = url
        .find(MARKER)
        .map(|i| i + MARKER.len())
        .ok_or_else(|| ClassifyError::MissingNotifyPath(url.to_string()))?;
    let len = url[start..]
        .find(".gif")
        .ok_or_else(|| ClassifyError::MissingNotifyPath(url.to_string()))?;
    Ok(&url[start..start + len])
}
