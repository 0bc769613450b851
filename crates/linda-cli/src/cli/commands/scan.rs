//! `linda scan <file.har>` – classify a HAR capture and print the filtered view.

use anyhow::Result;
use linda_core::har;
use linda_core::{CapturePresenter, Ingest, Presenter, Session};
use std::path::Path;

use super::{apply_settings, stdout_presenter};
use crate::cli::ViewSettings;

/// Ingestion totals for one scan.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanTotals {
    pub entries: usize,
    pub recorded: usize,
    pub ignored: usize,
    pub failed: usize,
}

/// Replay a HAR file into a session; the caller decides how to render it.
pub fn scan_into(path: &Path, settings: &ViewSettings) -> Result<(Session<CapturePresenter>, ScanTotals)> {
    let entries = har::load_har(path)?;
    let mut session = Session::new(CapturePresenter::new(settings.toggles));
    apply_settings(&mut session, settings)?;

    let mut totals = ScanTotals {
        entries: entries.len(),
        ..ScanTotals::default()
    };
    for entry in &entries {
        match session.on_request(entry) {
            Ingest::Recorded(_) => totals.recorded += 1,
            Ingest::Ignored => totals.ignored += 1,
            Ingest::Failed(_) => totals.failed += 1,
        }
    }
    tracing::info!(?totals, "scanned {}", path.display());
    Ok((session, totals))
}

pub fn run_scan(path: &Path, settings: &ViewSettings, stats: bool) -> Result<()> {
    let (session, totals) = scan_into(path, settings)?;
    let rows = session.view();
    stdout_presenter(settings, false).present(&rows);

    if stats {
        println!();
        println!(
            "{} entries: {} recorded, {} ignored, {} failed; {} shown",
            totals.entries,
            totals.recorded,
            totals.ignored,
            totals.failed,
            rows.len()
        );
        for (tracker, count) in session.store().counts() {
            if count > 0 {
                println!("  {:<6} {}", tracker.tag(), count);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FilterArgs;
    use linda_core::config::LindaConfig;
    use linda_core::TrackerType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn capture() -> NamedTempFile {
        let har = r#"{"log":{"version":"1.2","entries":[
            {"request":{"method":"GET","url":"https://www.google-analytics.com/collect?t=pageview"},"response":{"status":200}},
            {"request":{"method":"GET","url":"https://aa.lp4.io/v?ps=tv"},"response":{"status":200}},
            {"request":{"method":"GET","url":"https://aa.lp4.io/"},"response":{"status":200}},
            {"request":{"method":"GET","url":"https://example.com/"},"response":{"status":200}}
        ]}}"#;
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(har.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn scan_counts_outcomes() {
        let f = capture();
        let settings = FilterArgs::default().resolve(&LindaConfig::default());
        let (session, totals) = scan_into(f.path(), &settings).unwrap();
        assert_eq!(
            totals,
            ScanTotals {
                entries: 4,
                recorded: 2,
                ignored: 1,
                failed: 1
            }
        );
        assert_eq!(session.view().len(), 2);
    }

    #[test]
    fn scan_applies_only_flag() {
        let f = capture();
        let args = FilterArgs {
            only: Some(TrackerType::Lp),
            ..FilterArgs::default()
        };
        let settings = args.resolve(&LindaConfig::default());
        let (session, _) = scan_into(f.path(), &settings).unwrap();
        let rows = session.view();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].summary, "LP video:tv");
    }

    #[test]
    fn scan_rejects_bad_filter() {
        let f = capture();
        let args = FilterArgs {
            filter: Some("(".to_string()),
            ..FilterArgs::default()
        };
        let settings = args.resolve(&LindaConfig::default());
        let err = scan_into(f.path(), &settings).err().unwrap();
        assert!(format!("{:#}", err).contains("invalid --filter expression"));
    }
}
