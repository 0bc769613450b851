//! CLI for linda, the analytics beacon inspector.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use linda_core::config::{self, LindaConfig, OutputFormat};
use linda_core::{TrackerType, ViewToggles};
use std::path::PathBuf;

use commands::{run_completions, run_demo, run_scan, run_trackers, run_watch};

/// Top-level CLI for linda.
#[derive(Debug, Parser)]
#[command(name = "linda")]
#[command(about = "linda: inspect analytics beacons in captured network traffic", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify every request in a HAR capture and print the filtered view.
    Scan {
        /// Path to the HAR file (DevTools "Save all as HAR").
        path: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print per-tracker totals after the view.
        #[arg(long)]
        stats: bool,
    },

    /// Read finished requests as NDJSON from stdin and redraw the view after each beacon.
    Watch {
        #[command(flatten)]
        filters: FilterArgs,

        /// Do not clear the terminal between redraws.
        #[arg(long)]
        no_clear: bool,
    },

    /// Replay built-in sample beacons on a timer (self-test).
    Demo {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the tracker types linda recognizes.
    Trackers,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

/// Output renderer selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// View and filter flags shared by scan, watch and demo. They override config.toml.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive regex matched against each key=value pair.
    #[arg(long, short = 'f', value_name = "REGEX")]
    pub filter: Option<String>,

    /// Hide a tracker type (repeatable): GA, MMS, SIFO, LP, JTP, PLY.
    #[arg(long, short = 'x', value_name = "TYPE")]
    pub exclude: Vec<TrackerType>,

    /// Show only this tracker type.
    #[arg(long, value_name = "TYPE", conflicts_with = "exclude")]
    pub only: Option<TrackerType>,

    /// Keep only the matching key=value pairs under each row.
    #[arg(long)]
    pub prune: bool,

    /// Expand rows that match the filter.
    #[arg(long)]
    pub only_matched: bool,

    /// List details under every row.
    #[arg(long)]
    pub expand: bool,

    /// Output format (default from config, else text).
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

impl FilterArgs {
    /// Config values with command-line flags layered on top.
    pub fn resolve(&self, cfg: &LindaConfig) -> ViewSettings {
        let mut excluded = cfg.excluded_types.clone();
        for t in &self.exclude {
            if !excluded.contains(t) {
                excluded.push(*t);
            }
        }
        let filter_text = self
            .filter
            .as_deref()
            .or(cfg.filter_text.as_deref())
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        ViewSettings {
            excluded,
            only: self.only,
            filter_text,
            toggles: ViewToggles {
                prune: self.prune || cfg.prune,
                only_matched: self.only_matched || cfg.only_matched,
            },
            expand_details: self.expand || cfg.expand_details,
            format: self.format.map(OutputFormat::from).unwrap_or(cfg.format),
        }
    }
}

/// Effective view settings after merging config and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    pub excluded: Vec<TrackerType>,
    pub only: Option<TrackerType>,
    pub filter_text: String,
    pub toggles: ViewToggles,
    pub expand_details: bool,
    pub format: OutputFormat,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Scan {
                path,
                filters,
                stats,
            } => run_scan(&path, &filters.resolve(&cfg), stats)?,
            CliCommand::Watch { filters, no_clear } => {
                run_watch(&filters.resolve(&cfg), !no_clear).await?
            }
            CliCommand::Demo { filters } => {
                run_demo(&filters.resolve(&cfg), &cfg.demo_or_default()).await?
            }
            CliCommand::Trackers => run_trackers(),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
