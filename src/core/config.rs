use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::DashError;

const APP_DIR: &str = "griddash";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "griddash.log";

/// Runtime settings of the dashboard.
///
/// Read once at startup from `<config dir>/griddash/config.json`; every
/// field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Sampler cadence
    pub sample_interval_ms: u64,
    /// Upper bound on each input poll
    pub poll_timeout_ms: u64,
    /// CPU measurement window per sample
    pub cpu_window_ms: u64,
    pub quit_key: char,
    /// Used when `RUST_LOG` is not set
    pub log_level: String,
    /// `None` resolves to the platform cache directory
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 500,
            poll_timeout_ms: 100,
            cpu_window_ms: 100,
            quit_key: 'q',
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl DashboardConfig {
    /// Load from the user config directory, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Self = if data.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str(&data)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), DashError> {
        let intervals = [
            ("sample_interval_ms", self.sample_interval_ms),
            ("poll_timeout_ms", self.poll_timeout_ms),
            ("cpu_window_ms", self.cpu_window_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(DashError::config(format!("{} must be greater than 0", name)));
            }
        }

        if self.quit_key.is_whitespace() || self.quit_key.is_control() {
            return Err(DashError::config(format!(
                "quit_key {:?} is not a printable key",
                self.quit_key
            )));
        }

        Ok(())
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    pub fn cpu_window(&self) -> Duration {
        Duration::from_millis(self.cpu_window_ms)
    }

    /// Log destination, if one can be determined
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE)))
    }

    fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }
}
