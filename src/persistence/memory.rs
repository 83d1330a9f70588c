// ABOUTME: In-memory state repository holding the encoded run and settings blobs
// ABOUTME: Used by tests and embedders; goes through the same codec as the file backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use super::{decode_runs, decode_settings, encode_runs, encode_settings, StateRepository};
use async_trait::async_trait;
use runlog_core::errors::AppResult;
use runlog_core::models::{Run, Settings};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Key-value style store of the two persisted blobs
#[derive(Clone, Default)]
pub struct MemoryRepository {
    runs: Arc<RwLock<Option<String>>>,
    settings: Arc<RwLock<Option<String>>>,
}

impl MemoryRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-seeded with raw blobs, as left by an older version
    #[must_use]
    pub fn with_blobs(runs: Option<String>, settings: Option<String>) -> Self {
        Self {
            runs: Arc::new(RwLock::new(runs)),
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Raw stored run blob
    pub async fn runs_blob(&self) -> Option<String> {
        self.runs.read().await.clone()
    }

    /// Raw stored settings blob
    pub async fn settings_blob(&self) -> Option<String> {
        self.settings.read().await.clone()
    }
}

#[async_trait]
impl StateRepository for MemoryRepository {
    async fn load_runs(&self) -> AppResult<Vec<Run>> {
        Ok(self
            .runs
            .read()
            .await
            .as_deref()
            .map(decode_runs)
            .unwrap_or_default())
    }

    async fn save_runs(&self, runs: &[Run]) -> AppResult<()> {
        let encoded = encode_runs(runs)?;
        *self.runs.write().await = Some(encoded);
        Ok(())
    }

    async fn load_settings(&self, defaults: &Settings) -> AppResult<Settings> {
        Ok(self
            .settings
            .read()
            .await
            .as_deref()
            .map_or_else(|| defaults.clone(), |text| decode_settings(text, defaults)))
    }

    async fn save_settings(&self, settings: &Settings) -> AppResult<()> {
        let encoded = encode_settings(settings)?;
        *self.settings.write().await = Some(encoded);
        Ok(())
    }
}
