//! Configuration persistence
//!
//! Saves and loads user preferences such as the registration log path and
//! the TUI tick rate.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{GateError, Result};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "formgate";

/// Gate configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Where accepted registrations are written
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,

    /// TUI redraw tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join("registrations.json")
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl GateConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config).join(CONFIG_DIR_NAME);
            return Some(path);
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from disk
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        let path = match Self::config_file_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir().ok_or(GateError::NoConfigDir)?;
        let config_file = config_dir.join(CONFIG_FILE_NAME);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_file, contents)?;

        tracing::debug!("Saved config to {:?}", config_file);
        Ok(())
    }

    /// Update the registration log path and save
    pub fn set_log_path(&mut self, log_path: PathBuf) -> Result<()> {
        self.log_path = log_path;
        self.save()
    }
}
