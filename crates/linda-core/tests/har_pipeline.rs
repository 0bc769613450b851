//! Integration test: HAR file -> session -> filtered rows.

use std::io::Write;

use linda_core::har::load_har;
use linda_core::{CapturePresenter, Ingest, Session, TrackerType, ViewToggles};
use tempfile::NamedTempFile;

const CAPTURE: &str = r#"{
  "log": {
    "version": "1.2",
    "entries": [
      { "request": { "method": "GET", "url": "https://www.google-analytics.com/collect?t=pageview&ec=video&ea=play" }, "response": { "status": 200 } },
      { "request": { "method": "GET", "url": "https://sb.scorecardresearch.com/p?ns_st_ev=play&ns_st_ad=preroll" }, "response": { "status": 200 } },
      { "request": { "method": "GET", "url": "https://sb.scorecardresearch.com/p?ns_st_ev=pause" }, "response": { "status": 500 } },
      { "request": { "method": "GET", "url": "https://static.example.com/site.css" }, "response": { "status": 200 } },
      { "request": { "method": "POST", "url": "https://trafficgateway.research-int.se/TrafficCollector", "postData": { "mimeType": "application/x-www-form-urlencoded", "text": "cp=sport%2Ffotboll&siteId=9" } }, "response": { "status": 200 } },
      { "request": { "method": "GET", "url": "https://jtp.expressen.se/track" }, "response": { "status": 200 } },
      { "request": { "method": "GET", "url": "https://pixel.parsely.com/plogger/?action=pageview" }, "response": { "status": 200 } }
    ]
  }
}"#;

fn capture_file() -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(CAPTURE.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn replay(view: ViewToggles) -> (Session<CapturePresenter>, Vec<Ingest>) {
    let f = capture_file();
    let entries = load_har(f.path()).unwrap();
    let mut session = Session::new(CapturePresenter::new(view));
    let outcomes = entries.iter().map(|e| session.on_request(e)).collect();
    (session, outcomes)
}

#[test]
fn har_replay_classifies_known_beacons() {
    let (session, outcomes) = replay(ViewToggles::default());

    let recorded: Vec<TrackerType> = outcomes
        .iter()
        .filter_map(|o| match o {
            Ingest::Recorded(t) => Some(*t),
            _ => None,
        })
        .collect();
    assert_eq!(
        recorded,
        vec![
            TrackerType::Ga,
            TrackerType::Mms,
            TrackerType::Sifo,
            TrackerType::Ply
        ]
    );
    assert!(matches!(outcomes[5], Ingest::Failed(_)));

    let summaries: Vec<&str> = session
        .presenter()
        .rows
        .iter()
        .map(|r| r.summary.as_str())
        .collect();
    assert_eq!(
        summaries,
        vec![
            "GA pageview:video:play",
            "MMS preroll:play",
            "SIFO sport/fotboll",
            "PLY pageview"
        ]
    );
}

#[test]
fn har_replay_with_text_filter_and_prune() {
    let (mut session, _) = replay(ViewToggles {
        prune: true,
        only_matched: false,
    });
    session.set_filter_text("PLAY").unwrap();
    let rows = &session.presenter().rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].tracker, TrackerType::Ga);
    assert_eq!(rows[0].details.len(), 1);
    assert_eq!(rows[0].details[0].joined(), "ea=play");
    assert_eq!(rows[1].details[0].joined(), "ns_st_ev=play");

    session.reset();
    assert!(session.presenter().rows.is_empty());
    assert_eq!(session.filter_text(), "PLAY");
}
