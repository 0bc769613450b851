use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::filter::ViewToggles;
use crate::tracker::TrackerType;

/// Demo replay schedule (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Spacing between consecutive samples, in milliseconds.
    pub step_ms: u64,
    /// Quadratic speed-up per sample, in milliseconds.
    pub decay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            step_ms: 1000,
            decay_ms: 50,
        }
    }
}

impl DemoConfig {
    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    pub fn decay(&self) -> Duration {
        Duration::from_millis(self.decay_ms)
    }
}

/// Output renderer for the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/linda/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LindaConfig {
    /// Tracker types hidden by default.
    #[serde(default)]
    pub excluded_types: Vec<TrackerType>,
    /// Filter expression applied at startup.
    #[serde(default)]
    pub filter_text: Option<String>,
    /// Show only the matching key=value pairs under each row.
    #[serde(default)]
    pub prune: bool,
    /// Expand matching rows while a filter is active.
    #[serde(default)]
    pub only_matched: bool,
    /// Always list details under every row.
    #[serde(default)]
    pub expand_details: bool,
    #[serde(default)]
    pub format: OutputFormat,
    /// Optional demo replay schedule; built-in defaults when missing.
    #[serde(default)]
    pub demo: Option<DemoConfig>,
}

impl LindaConfig {
    pub fn view_toggles(&self) -> ViewToggles {
        ViewToggles {
            prune: self.prune,
            only_matched: self.only_matched,
        }
    }

    pub fn demo_or_default(&self) -> DemoConfig {
        self.demo.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linda")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LindaConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LindaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: LindaConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
