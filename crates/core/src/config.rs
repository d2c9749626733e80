//! Stepper configuration loaded from TOML.
//!
//! ```toml
//! num_steps_per_year = 90
//! verbose = false
//! ```
//!
//! Every field is optional; missing fields take their defaults and unknown
//! fields are rejected.

use serde::Deserialize;
use thiserror::Error;

use crate::{Calendar, CalendarError, calendar::DEFAULT_STEPS_PER_YEAR};

/// Errors raised while loading a [`StepperConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid stepper configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Settings for a time-stepped simulation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepperConfig {
    /// Temporal resolution: the number of steps in one calendar year.
    #[serde(default = "default_num_steps_per_year")]
    pub num_steps_per_year: u32,

    /// Report progress of integrations through the log.
    #[serde(default)]
    pub verbose: bool,
}

fn default_num_steps_per_year() -> u32 {
    DEFAULT_STEPS_PER_YEAR
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            num_steps_per_year: default_num_steps_per_year(),
            verbose: false,
        }
    }
}

impl StepperConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML for this
    /// configuration, or [`ConfigError::Calendar`] if the settings describe
    /// an invalid calendar.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.calendar()?;
        Ok(config)
    }

    /// Builds the [`Calendar`] described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if `num_steps_per_year` is zero.
    pub fn calendar(&self) -> Result<Calendar, CalendarError> {
        Calendar::new(self.num_steps_per_year)
    }
}
