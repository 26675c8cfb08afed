//! Configuration for drivers of the simulation.
//!
//! Supports YAML configuration files with sensible defaults. Everything in
//! here is presentation/driver state: the engine itself never reads it.

use crate::cell::DisplayCategory;
use crate::rules::RuleVariant;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub display: DisplayConfig,
    pub timer: TimerConfig,
    pub logging: LoggingConfig,
    /// Rule variant selected at startup
    #[serde(default)]
    pub rule: RuleVariant,
}

/// Named colors available for the cell palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellColor {
    Black,
    Green,
    Yellow,
    Red,
    Blue,
    Orange,
}

/// Color assignment for the three cell display categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Color for currently live cells
    pub alive: CellColor,
    /// Color for cells that were alive but are now dead
    pub previously_alive: CellColor,
    /// Color for cells that have never been alive
    pub never_alive: CellColor,
}

impl DisplayConfig {
    /// Resolve the configured color for a display category
    pub fn color_for(&self, category: DisplayCategory) -> CellColor {
        match category {
            DisplayCategory::Alive => self.alive,
            DisplayCategory::PreviouslyAlive => self.previously_alive,
            DisplayCategory::NeverAlive => self.never_alive,
        }
    }
}

/// Animation timer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Generations per second while running, 0 to 100. 0 means the timer
    /// never fires.
    pub rate: u8,
}

/// Logging and stats configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Generations between stats lines
    pub stats_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            timer: TimerConfig::default(),
            logging: LoggingConfig::default(),
            rule: RuleVariant::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            alive: CellColor::Green,
            previously_alive: CellColor::Orange,
            never_alive: CellColor::Black,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { rate: 5 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { stats_interval: 10 }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timer.rate > crate::simulation::MAX_RATE {
            return Err(format!(
                "timer rate must be between 0 and {}",
                crate::simulation::MAX_RATE
            ));
        }
        if self.logging.stats_interval == 0 {
            return Err("stats_interval must be > 0".to_string());
        }
        Ok(())
    }
}
