//! Session settings
//!
//! Bootstrap parameters for a new session. Reward, order levels and the item
//! level cap are fixed rules and live in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::board::slot_count_for;

/// Session bootstrap parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Edge length of the square grid
    pub grid_size: usize,
    /// Energy cap
    pub max_energy: u32,
    /// Energy at session start
    pub initial_energy: u32,
    /// Energy granted by the daily bonus (clamped to `max_energy`)
    pub daily_bonus_energy: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            max_energy: MAX_ENERGY,
            initial_energy: INITIAL_ENERGY,
            daily_bonus_energy: DAILY_BONUS_ENERGY,
        }
    }
}

impl Settings {
    /// Check the parameters describe a playable session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if slot_count_for(self.grid_size).is_none() {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        if self.initial_energy > self.max_energy {
            return Err(ConfigError::EnergyAboveMax {
                initial: self.initial_energy,
                max: self.max_energy,
            });
        }
        Ok(())
    }

    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of integers, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path` if given, falling back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("{}; using default settings", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
