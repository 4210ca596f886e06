// Settings module
// Application configuration read from config.toml

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::event::{HexColor, DEFAULT_EVENT_COLOR};

/// File name of the persisted event document
pub const EVENTS_FILE_NAME: &str = "calendar_events.json";
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn default_color() -> String {
    DEFAULT_EVENT_COLOR.to_string()
}

fn default_window_width() -> f32 {
    1000.0
}

fn default_window_height() -> f32 {
    700.0
}

/// User configuration.
///
/// Every field is optional in the file; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Override for the events file location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    /// Color preselected in the Add Event dialog
    #[serde(default = "default_color")]
    pub default_color: String,

    #[serde(default = "default_window_width")]
    pub window_width: f32,

    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            events_file: None,
            default_color: default_color(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "Ken24T", "month-calendar")
    }

    /// Location of config.toml in the platform config directory
    pub fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load configuration from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the platform config directory, falling back to defaults on
    /// any failure.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_config_path() else {
            log::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        match Self::load_or_create(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load from `path`; on first run write the defaults there so the file
    /// exists for the user to edit.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        let config = Self::default();
        match config.save(path) {
            Ok(()) => log::info!("Wrote default config to {}", path.display()),
            Err(e) => log::warn!("Could not write default config: {:#}", e),
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Where the events file lives: explicit override, then the platform
    /// data directory, then the working directory.
    pub fn events_path(&self) -> PathBuf {
        if let Some(path) = &self.events_file {
            return path.clone();
        }

        match Self::project_dirs() {
            Some(dirs) => dirs.data_dir().join(EVENTS_FILE_NAME),
            None => PathBuf::from(EVENTS_FILE_NAME),
        }
    }

    /// Validated default color; an unusable value falls back to the
    /// built-in default.
    pub fn default_event_color(&self) -> HexColor {
        match HexColor::parse(&self.default_color) {
            Ok(color) => color,
            Err(e) => {
                log::warn!(
                    "Ignoring configured default_color '{}': {}",
                    self.default_color,
                    e
                );
                HexColor::default()
            }
        }
    }
}
