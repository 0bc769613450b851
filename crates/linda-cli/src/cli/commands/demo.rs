//! `linda demo` – timed replay of the built-in sample beacons.

use anyhow::Result;
use linda_core::config::DemoConfig;
use linda_core::demo;
use linda_core::Session;

use super::{apply_settings, stdout_presenter};
use crate::cli::ViewSettings;

pub async fn run_demo(settings: &ViewSettings, schedule: &DemoConfig) -> Result<()> {
    let mut session = Session::new(stdout_presenter(settings, true));
    apply_settings(&mut session, settings)?;

    let samples = demo::sample_requests();
    demo::replay(&mut session, &samples, schedule.step(), schedule.decay()).await;
    Ok(())
}
