//! Self-test replay: canned beacons fed into a session on a staggered schedule.
//!
//! Used when no capture is at hand, to see the pipeline work end to end.

use std::time::Duration;

use crate::present::Presenter;
use crate::request::FinishedRequest;
use crate::session::{Ingest, Session};

/// Canned requests: one per tracker plus a few that must not produce events.
pub fn sample_requests() -> Vec<FinishedRequest> {
    vec![
        FinishedRequest::get(
            "https://www.google-analytics.com/collect?v=1&t=pageview&dp=%2Fnyheter&cd35=article",
            200,
        ),
        FinishedRequest::get(
            "https://sb.scorecardresearch.com/p?c1=2&ns_st_ty=video&ns_st_ev=play&mms_campaignid=spring",
            200,
        ),
        FinishedRequest::get(
            "https://trafficgateway.research-int.se/TrafficCollector?siteId=42&cp=nyheter/sverige",
            200,
        ),
        FinishedRequest::get("https://cdn.example.com/app.js", 200),
        FinishedRequest::get("https://aa.lp4.io/p?ps=nyheter&r=1", 200),
        FinishedRequest::get(
            "https://sb.scorecardresearch.com/p?ns_st_ad=preroll&ns_st_ev=play",
            200,
        ),
        FinishedRequest::post_form(
            "https://www.google-analytics.com/r/collect",
            "v=1&t=event&ec=video&ea=play&el=preroll",
            200,
        ),
        FinishedRequest::get("https://jtp.expressen.se/notify/pageview.gif?id=17", 200),
        FinishedRequest::get(
            "https://sb.scorecardresearch.com/p?ns_st_ev=hb&ns_st_ty=video",
            204,
        ),
        FinishedRequest::get(
            "https://pixel.parsely.com/plogger/?action=heartbeat&url=https%3A%2F%2Fexample.com",
            200,
        ),
        FinishedRequest::get("https://aa.lp4.io/", 200),
        FinishedRequest::get("https://aa.lp4.io/is?ps=sport", 200),
    ]
}

/// Offset of sample `index` from the start: `step*i - decay*i^2`, never negative.
pub fn replay_delay(index: u32, step: Duration, decay: Duration) -> Duration {
    let i = index;
    (step * i).saturating_sub(decay * (i * i))
}

/// Feed `samples` into the session, each at its scheduled offset.
///
/// Offsets are measured from the start of the replay, so samples whose
/// offsets shrink (large indices) are delivered back to back, in order.
pub async fn replay<P: Presenter>(
    session: &mut Session<P>,
    samples: &[FinishedRequest],
    step: Duration,
    decay: Duration,
) -> Vec<Ingest> {
    let start = tokio::time::Instant::now();
    let mut outcomes = Vec::with_capacity(samples.len());
    for (i, sample) in samples.iter().enumerate() {
        let offset = replay_delay(i as u32, step, decay);
        tokio::time::sleep_until(start + offset).await;
        outcomes.push(session.on_request(sample));
    }
    tracing::info!(samples = samples.len(), "demo replay finished");
    outcomes
}
