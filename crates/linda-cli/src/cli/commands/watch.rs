//! `linda watch` – live view over NDJSON on stdin.
//!
//! Request lines feed the session; control lines (`reset`, `filter`,
//! `toggle`, `only`) change the filter state while the stream is running.

use anyhow::{Context, Result};
use linda_core::stream::parse_ndjson_line;
use linda_core::{Presenter, Session, StreamRecord};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::{apply_settings, stdout_presenter};
use crate::cli::ViewSettings;

pub async fn run_watch(settings: &ViewSettings, clear_screen: bool) -> Result<()> {
    let mut session = Session::new(stdout_presenter(settings, clear_screen));
    apply_settings(&mut session, settings)?;
    watch_stream(&mut session, BufReader::new(tokio::io::stdin())).await?;
    tracing::info!(events = session.store().len(), "stdin closed");
    Ok(())
}

/// Drive `session` from NDJSON lines until EOF. Bad lines and rejected
/// controls are logged and skipped.
pub(crate) async fn watch_stream<R, P>(session: &mut Session<P>, reader: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    P: Presenter,
{
    let mut lines = reader.lines();
    let mut line_no = 0usize;
    while let Some(line) = lines.next_line().await.context("read stdin")? {
        line_no += 1;
        match parse_ndjson_line(&line) {
            Ok(Some(StreamRecord::Request(request))) => {
                session.on_request(&request);
            }
            Ok(Some(StreamRecord::Control(control))) => {
                tracing::debug!(?control, "control");
                if let Err(e) = session.apply_control(&control) {
                    tracing::warn!(line = line_no, "rejected control: {}", e);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(line = line_no, "skipping malformed line: {}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linda_core::{CapturePresenter, TrackerType, ViewToggles};

    fn request(url: &str) -> String {
        format!(r#"{{"request":{{"method":"GET","url":"{url}"}},"response":{{"status":200}}}}"#)
    }

    fn trackers(session: &Session<CapturePresenter>) -> Vec<TrackerType> {
        session.presenter().rows.iter().map(|r| r.tracker).collect()
    }

    async fn run(session: &mut Session<CapturePresenter>, lines: &[String]) {
        let input = lines.join("\n");
        watch_stream(session, input.as_bytes()).await.unwrap();
    }

    #[tokio::test]
    async fn controls_interleave_with_requests() {
        let mut session = Session::new(CapturePresenter::new(ViewToggles::default()));
        let ga = request("https://www.google-analytics.com/collect?t=event&ea=play");
        let sifo = request("https://trafficgateway.research-int.se/TrafficCollector?cp=sport");
        let mms = request("https://sb.scorecardresearch.com/p?ns_st_ev=play");

        run(
            &mut session,
            &[
                ga.clone(),
                r#"{"control":"toggle","type":"GA","included":true}"#.to_string(),
                sifo.clone(),
            ],
        )
        .await;
        assert_eq!(trackers(&session), vec![TrackerType::Sifo]);

        run(
            &mut session,
            &[
                r#"{"control":"toggle","type":"GA","included":false}"#.to_string(),
                r#"{"control":"filter","text":"play"}"#.to_string(),
                mms.clone(),
            ],
        )
        .await;
        assert_eq!(trackers(&session), vec![TrackerType::Ga, TrackerType::Mms]);

        run(
            &mut session,
            &[
                r#"{"control":"only","type":"MMS"}"#.to_string(),
                r#"{"control":"filter","text":"("}"#.to_string(),
            ],
        )
        .await;
        assert_eq!(trackers(&session), vec![TrackerType::Mms]);
        assert_eq!(session.filter_text(), "play");

        run(
            &mut session,
            &[r#"{"control":"reset"}"#.to_string(), ga, mms],
        )
        .await;
        assert_eq!(session.store().len(), 2);
        assert_eq!(trackers(&session), vec![TrackerType::Mms]);
    }

    #[tokio::test]
    async fn malformed_lines_do_not_stop_the_stream() {
        let mut session = Session::new(CapturePresenter::default());
        run(
            &mut session,
            &[
                "not json".to_string(),
                r#"{"control":"explode"}"#.to_string(),
                String::new(),
                request("https://aa.lp4.io/p?ps=home"),
            ],
        )
        .await;
        assert_eq!(trackers(&session), vec![TrackerType::Lp]);
        assert_eq!(session.presenter().refreshes, 1);
    }
}
