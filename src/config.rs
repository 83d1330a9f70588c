// ABOUTME: Environment-based configuration for the data directory and default max heart rate
// ABOUTME: Command-line flags override values read from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use crate::logging::LoggingConfig;
use runlog_core::constants::heart_rate::DEFAULT_ASSUMED_AGE;
use runlog_core::errors::{AppError, AppResult, ErrorCode};
use runlog_core::intelligence::algorithms::estimate_max_hr;
use runlog_core::models::Settings;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "RUNLOG_DATA_DIR";
/// Environment variable overriding the age behind the default max heart rate
pub const ASSUMED_AGE_ENV: &str = "RUNLOG_ASSUMED_AGE";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct RunlogConfig {
    /// Directory holding `runs.json` and `settings.json`
    pub data_dir: PathBuf,
    /// Age used for the default max heart rate estimate
    pub assumed_age: u32,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl RunlogConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `RUNLOG_ASSUMED_AGE` is set but is not an
    /// age the max heart rate estimate accepts.
    pub fn from_env() -> AppResult<Self> {
        let data_dir = env::var(DATA_DIR_ENV)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        let assumed_age = match env::var(ASSUMED_AGE_ENV) {
            Ok(raw) => parse_age(&raw)?,
            Err(_) => DEFAULT_ASSUMED_AGE,
        };

        Ok(Self {
            data_dir,
            assumed_age,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Replace the data directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Default settings for a fresh install or a reset
    ///
    /// # Errors
    ///
    /// Returns an error if the configured age is outside the estimate's range.
    pub fn default_settings(&self) -> AppResult<Settings> {
        Ok(Settings {
            max_hr_user: Some(estimate_max_hr(self.assumed_age)?),
            ..Settings::default()
        })
    }
}

fn parse_age(raw: &str) -> AppResult<u32> {
    let invalid = || {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("{ASSUMED_AGE_ENV} must be an age between 1 and 120, got '{raw}'"),
        )
    };
    let age = raw.trim().parse::<u32>().map_err(|_| invalid())?;
    estimate_max_hr(age).map_err(|_| invalid())?;
    Ok(age)
}

/// Platform data directory, or `./.runlog` when none is known
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".runlog"), |dir| dir.join("runlog"))
}
