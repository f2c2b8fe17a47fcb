//! Game settings and tuning
//!
//! Read from an optional JSON file in the working directory.
//! Every field has a default, so partial files are fine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_MS;
use crate::sim::{Tuning, TuningError};

/// Failure to load a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings JSON for {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("tick period must be at least 1 ms")]
    ZeroTickPeriod,
    #[error("invalid tuning: {0}")]
    InvalidTuning(#[from] TuningError),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Track geometry and pacing
    pub tuning: Tuning,
    /// Simulation period in milliseconds
    pub tick_ms: u64,
    /// Where the best score is kept
    pub score_file: PathBuf,

    // === Demo player ===
    pub autopilot_seed: u64,
    /// Chance (0.0 - 1.0) that the autopilot misses a jump window
    pub autopilot_miss_chance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            tick_ms: TICK_MS,
            score_file: PathBuf::from(Self::DEFAULT_SCORE_FILE),
            autopilot_seed: 0x5eed,
            autopilot_miss_chance: 0.15,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const DEFAULT_PATH: &'static str = "hurdle_settings.json";
    const DEFAULT_SCORE_FILE: &'static str = "highest_score.txt";

    /// Fixed simulation period
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Parse settings from JSON text
    pub fn from_json(path: &Path, json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if settings.tick_ms == 0 {
            return Err(SettingsError::ZeroTickPeriod);
        }
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    ///
    /// A missing file is not an error: defaults are returned.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(path, &json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source: io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
