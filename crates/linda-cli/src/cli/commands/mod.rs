//! CLI command handlers, one file per command.

mod completions;
mod demo;
mod scan;
mod trackers;
mod watch;

pub use completions::run_completions;
pub use demo::run_demo;
pub use scan::run_scan;
pub use trackers::run_trackers;
pub use watch::run_watch;

use anyhow::{Context, Result};
use linda_core::config::OutputFormat;
use linda_core::{FilterSettings, JsonPresenter, Presenter, Session, TextPresenter};
use std::io;

use super::ViewSettings;

/// Renderer for the chosen format, writing to stdout.
pub(crate) fn stdout_presenter(settings: &ViewSettings, clear_screen: bool) -> Box<dyn Presenter> {
    match settings.format {
        OutputFormat::Text => Box::new(
            TextPresenter::new(io::stdout(), settings.toggles)
                .expand_details(settings.expand_details)
                .clear_screen(clear_screen),
        ),
        OutputFormat::Json => Box::new(JsonPresenter::new(io::stdout(), settings.toggles)),
    }
}

/// Push exclusions, isolation and the filter text into a fresh session.
/// The presenter sees exactly one view.
pub(crate) fn apply_settings<P: Presenter>(session: &mut Session<P>, settings: &ViewSettings) -> Result<()> {
    let filters = FilterSettings {
        excluded: settings.excluded.clone(),
        only: settings.only,
        filter_text: settings.filter_text.clone(),
    };
    session
        .configure(&filters)
        .context("invalid --filter expression")
}
