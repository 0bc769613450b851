//! Tests for scan, watch, demo, trackers and completions parsing.

use super::parse;
use crate::cli::{Cli, CliCommand, FormatArg};
use clap::Parser;
use linda_core::TrackerType;

#[test]
fn cli_parse_scan_defaults() {
    match parse(&["linda", "scan", "capture.har"]) {
        CliCommand::Scan {
            path,
            filters,
            stats,
        } => {
            assert_eq!(path, std::path::PathBuf::from("capture.har"));
            assert!(!stats);
            assert!(filters.filter.is_none());
            assert!(filters.exclude.is_empty());
            assert!(filters.only.is_none());
            assert!(!filters.prune);
            assert!(filters.format.is_none());
        }
        _ => panic!("expected Scan"),
    }
}

#[test]
fn cli_parse_scan_with_filters() {
    match parse(&[
        "linda", "scan", "x.har", "--filter", "video", "-x", "ga", "--exclude", "SIFO", "--prune",
        "--only-matched", "--format", "json", "--stats",
    ]) {
        CliCommand::Scan {
            filters, stats, ..
        } => {
            assert!(stats);
            assert_eq!(filters.filter.as_deref(), Some("video"));
            assert_eq!(filters.exclude, vec![TrackerType::Ga, TrackerType::Sifo]);
            assert!(filters.prune);
            assert!(filters.only_matched);
            assert_eq!(filters.format, Some(FormatArg::Json));
        }
        _ => panic!("expected Scan with filters"),
    }
}

#[test]
fn cli_parse_scan_only() {
    match parse(&["linda", "scan", "x.har", "--only", "mms"]) {
        CliCommand::Scan { filters, .. } => assert_eq!(filters.only, Some(TrackerType::Mms)),
        _ => panic!("expected Scan with --only"),
    }
}

#[test]
fn cli_rejects_unknown_tracker() {
    assert!(Cli::try_parse_from(["linda", "scan", "x.har", "--exclude", "omniture"]).is_err());
}

#[test]
fn cli_rejects_only_with_exclude() {
    assert!(Cli::try_parse_from(["linda", "scan", "x.har", "--only", "GA", "-x", "MMS"]).is_err());
}

#[test]
fn cli_parse_watch() {
    match parse(&["linda", "watch", "--no-clear", "-f", "play"]) {
        CliCommand::Watch { filters, no_clear } => {
            assert!(no_clear);
            assert_eq!(filters.filter.as_deref(), Some("play"));
        }
        _ => panic!("expected Watch"),
    }
}

#[test]
fn cli_parse_demo() {
    match parse(&["linda", "demo", "--expand"]) {
        CliCommand::Demo { filters } => assert!(filters.expand),
        _ => panic!("expected Demo"),
    }
}

#[test]
fn cli_parse_trackers() {
    match parse(&["linda", "trackers"]) {
        CliCommand::Trackers => {}
        _ => panic!("expected Trackers"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["linda", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}
