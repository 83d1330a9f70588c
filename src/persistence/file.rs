// ABOUTME: JSON file state repository storing runs.json and settings.json in a data directory
// ABOUTME: Writes go to a temporary file first and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use super::{decode_runs, decode_settings, encode_runs, encode_settings, StateRepository};
use async_trait::async_trait;
use runlog_core::errors::{AppError, AppResult};
use runlog_core::models::{Run, Settings};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

const RUNS_FILE: &str = "runs.json";
const SETTINGS_FILE: &str = "settings.json";

/// File-backed repository rooted at a data directory
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    data_dir: PathBuf,
}

impl JsonFileRepository {
    /// Repository rooted at `data_dir`; the directory is created on first write
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Data directory
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the run collection file
    #[must_use]
    pub fn runs_path(&self) -> PathBuf {
        self.data_dir.join(RUNS_FILE)
    }

    /// Path of the settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    async fn read_optional(path: &Path) -> AppResult<Option<String>> {
        match fs::read_to_string(path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored file yet");
                Ok(None)
            }
            Err(e) => Err(AppError::storage(format!("failed to read {}", path.display()))
                .with_source(e)),
        }
    }

    async fn write_atomic(&self, path: &Path, contents: String) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            AppError::storage(format!("failed to create {}", self.data_dir.display()))
                .with_source(e)
        })?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, contents).await.map_err(|e| {
            AppError::storage(format!("failed to write {}", staging.display())).with_source(e)
        })?;
        fs::rename(&staging, path).await.map_err(|e| {
            AppError::storage(format!("failed to replace {}", path.display())).with_source(e)
        })?;
        Ok(())
    }
}

#[async_trait]
impl StateRepository for JsonFileRepository {
    async fn load_runs(&self) -> AppResult<Vec<Run>> {
        let runs = Self::read_optional(&self.runs_path())
            .await?
            .as_deref()
            .map(decode_runs)
            .unwrap_or_default();
        debug!(count = runs.len(), "Loaded stored runs");
        Ok(runs)
    }

    async fn save_runs(&self, runs: &[Run]) -> AppResult<()> {
        self.write_atomic(&self.runs_path(), encode_runs(runs)?)
            .await?;
        info!(count = runs.len(), path = %self.runs_path().display(), "Saved runs");
        Ok(())
    }

    async fn load_settings(&self, defaults: &Settings) -> AppResult<Settings> {
        Ok(Self::read_optional(&self.settings_path())
            .await?
            .as_deref()
            .map_or_else(|| defaults.clone(), |text| decode_settings(text, defaults)))
    }

    async fn save_settings(&self, settings: &Settings) -> AppResult<()> {
        self.write_atomic(&self.settings_path(), encode_settings(settings)?)
            .await?;
        info!(path = %self.settings_path().display(), "Saved settings");
        Ok(())
    }
}
