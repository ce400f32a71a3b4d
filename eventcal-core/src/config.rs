//! eventcal configuration.

use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventcalError, EventcalResult};
use crate::event::DEFAULT_NOTIFICATION_MINUTES;

static DEFAULT_DATA_DIR: &str = "~/.local/share/eventcal";

const DEFAULT_HORIZON_DAYS: u32 = 365;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

fn default_notification_minutes() -> u32 {
    DEFAULT_NOTIFICATION_MINUTES
}

/// Configuration at ~/.config/eventcal/config.toml
///
/// Every key can be overridden with an `EVENTCAL_`-prefixed environment
/// variable (e.g. `EVENTCAL_HORIZON_DAYS=90`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventcalConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// How far past an event's start date recurring events are generated
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,

    #[serde(default = "default_notification_minutes")]
    pub default_notification_minutes: u32,
}

impl Default for EventcalConfig {
    fn default() -> Self {
        EventcalConfig {
            data_dir: default_data_dir(),
            horizon_days: DEFAULT_HORIZON_DAYS,
            default_notification_minutes: DEFAULT_NOTIFICATION_MINUTES,
        }
    }
}

impl EventcalConfig {
    pub fn config_path() -> EventcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventcalError::Config("Could not determine config directory".into()))?
            .join("eventcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file on first run.
    pub fn load() -> EventcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` (optional) layered under `EVENTCAL_*` variables.
    pub fn load_from(path: &Path) -> EventcalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("EVENTCAL"))
            .build()
            .map_err(|e| EventcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventcalError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The latest date recurring events starting on `start` are generated for.
    pub fn horizon_for(&self, start: NaiveDate) -> NaiveDate {
        start
            .checked_add_days(Days::new(self.horizon_days.into()))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn save(&self, path: &Path) -> EventcalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EventcalError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| EventcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventcalResult<()> {
        let contents = format!(
            "\
# eventcal configuration

# Where events.json is stored:
# data_dir = \"{}\"

# How many days ahead recurring events are generated:
# horizon_days = {}

# Minutes before an event to notify, for new events:
# default_notification_minutes = {}
",
            DEFAULT_DATA_DIR, DEFAULT_HORIZON_DAYS, DEFAULT_NOTIFICATION_MINUTES
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
