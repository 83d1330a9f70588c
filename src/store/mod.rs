// ABOUTME: Run store state container owning the run collection and settings
// ABOUTME: All mutation goes through submit, update, delete, clear, import, and settings entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

//! Run store.
//!
//! [`RunLog`] is the only holder of mutable state. Every entry point runs to
//! completion under `&mut self`; a multi-threaded host wraps the container
//! in a mutex. Statistics are computed on demand from the current state and
//! never cached.

/// Identifier-keyed merge and canonical ordering
pub mod merge;
/// Normalization of loosely typed run records
pub mod sanitize;
/// Entry-form validation
pub mod validation;

use crate::persistence::StateRepository;
use crate::transfer::{parse_import, ImportError};
use chrono::NaiveDate;
use merge::{merge, sort_runs};
use runlog_core::errors::{AppError, AppResult};
use runlog_core::models::{Run, RunId, Settings};
use runlog_intelligence::goals::{goal_progress, GoalProgressReport};
use runlog_intelligence::stats::{compute_stats, compute_stats_at, StatsSnapshot};
use runlog_intelligence::zones::{zone_boundaries_bpm, Zone};
use std::collections::{BTreeMap, HashSet};
use std::mem;
use tracing::{debug, info};
use validation::{
    validate_run_form, validate_settings_form, Advisory, RunForm, SettingsForm, SubmissionError,
};

/// Accepted run plus the advisories to show alongside it
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    /// The stored run
    pub run: Run,
    /// Non-blocking warnings
    pub advisories: Vec<Advisory>,
}

/// Result of a successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Valid runs found in the file
    pub imported: usize,
    /// Runs whose identifier was new
    pub added: usize,
    /// Runs that replaced an existing run with the same identifier
    pub updated: usize,
    /// File elements discarded by sanitization
    pub rejected: usize,
    /// Collection size after the merge
    pub total: usize,
}

/// Owned run collection and settings
#[derive(Debug, Clone, PartialEq)]
pub struct RunLog {
    runs: Vec<Run>,
    settings: Settings,
    default_settings: Settings,
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new(Vec::new(), Settings::default())
    }
}

impl RunLog {
    /// Container over existing state; runs are put into canonical order
    #[must_use]
    pub fn new(mut runs: Vec<Run>, settings: Settings) -> Self {
        sort_runs(&mut runs);
        Self {
            runs,
            settings,
            default_settings: Settings::default(),
        }
    }

    /// Replace the settings restored by [`RunLog::reset_settings`]
    #[must_use]
    pub fn with_default_settings(mut self, defaults: Settings) -> Self {
        self.default_settings = defaults;
        self
    }

    /// Load state from a repository
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub async fn load<R: StateRepository + ?Sized>(
        repository: &R,
        defaults: Settings,
    ) -> AppResult<Self> {
        let runs = repository.load_runs().await?;
        let settings = repository.load_settings(&defaults).await?;
        info!(runs = runs.len(), "Loaded run log");
        Ok(Self::new(runs, settings).with_default_settings(defaults))
    }

    /// Write runs and settings to a repository
    ///
    /// # Errors
    ///
    /// Returns an error if either value cannot be stored.
    pub async fn persist<R: StateRepository + ?Sized>(&self, repository: &R) -> AppResult<()> {
        repository.save_runs(&self.runs).await?;
        repository.save_settings(&self.settings).await
    }

    /// Validate a form and add it as a new run
    ///
    /// # Errors
    ///
    /// Returns the [`SubmissionError`] of the form; state is untouched.
    pub fn submit(&mut self, form: &RunForm) -> Result<SubmitOutcome, SubmissionError> {
        let validated = validate_run_form(form)?;
        let advisories = validated.advisories.clone();
        let run = validated.into_run(RunId::generate());

        self.runs.push(run.clone());
        sort_runs(&mut self.runs);
        info!(run_id = %run.id(), date = %run.date(), km = run.distance_km(), "Run saved");
        Ok(SubmitOutcome { run, advisories })
    }

    /// Validate a form and replace the run with identifier `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown identifier, or the form's
    /// validation error.
    pub fn update(&mut self, id: &RunId, form: &RunForm) -> AppResult<SubmitOutcome> {
        let index = self.position(id)?;
        let validated = validate_run_form(form)?;
        let advisories = validated.advisories.clone();
        let run = validated.into_run(id.clone());

        self.runs[index] = run.clone();
        sort_runs(&mut self.runs);
        info!(run_id = %id, "Run updated");
        Ok(SubmitOutcome { run, advisories })
    }

    /// Remove one run
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown identifier.
    pub fn delete(&mut self, id: &RunId) -> AppResult<Run> {
        let index = self.position(id)?;
        let removed = self.runs.remove(index);
        info!(run_id = %id, "Run deleted");
        Ok(removed)
    }

    /// Remove every run, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.runs.len();
        self.runs.clear();
        info!(removed, "All runs cleared");
        removed
    }

    /// Import a JSON backup and merge it into the collection
    ///
    /// # Errors
    ///
    /// Returns an [`ImportError`] for structural problems; nothing is merged.
    pub fn import_json(&mut self, text: &str) -> Result<ImportSummary, ImportError> {
        let batch = parse_import(text)?;
        let existing: HashSet<&RunId> = self.runs.iter().map(Run::id).collect();
        let incoming: HashSet<&RunId> = batch.runs.iter().map(Run::id).collect();
        let updated = incoming.intersection(&existing).count();
        let added = incoming.len() - updated;
        let imported = batch.runs.len();

        self.runs = merge(mem::take(&mut self.runs), batch.runs);
        let summary = ImportSummary {
            imported,
            added,
            updated,
            rejected: batch.rejected,
            total: self.runs.len(),
        };
        info!(
            imported,
            added,
            updated,
            rejected = summary.rejected,
            total = summary.total,
            "Import merged"
        );
        Ok(summary)
    }

    /// Validate and store the settings form
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::InvalidFields`]; settings stay unchanged.
    pub fn save_settings(&mut self, form: &SettingsForm) -> Result<&Settings, SubmissionError> {
        self.settings = validate_settings_form(form, &self.settings)?;
        info!(max_hr = ?self.settings.max_hr(), "Settings saved");
        Ok(&self.settings)
    }

    /// Restore default settings
    pub fn reset_settings(&mut self) -> &Settings {
        self.settings = self.default_settings.clone();
        info!("Settings reset to defaults");
        &self.settings
    }

    /// Runs in canonical order, newest first
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Run by identifier
    #[must_use]
    pub fn get(&self, id: &RunId) -> Option<&Run> {
        self.runs.iter().find(|run| run.id() == id)
    }

    /// Most recent run
    #[must_use]
    pub fn latest(&self) -> Option<&Run> {
        self.runs.first()
    }

    /// Current settings
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Statistics anchored to the local calendar day
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        debug!(runs = self.runs.len(), "Computing stats");
        compute_stats(&self.runs, &self.settings)
    }

    /// Statistics anchored to `today`
    #[must_use]
    pub fn stats_at(&self, today: NaiveDate) -> StatsSnapshot {
        compute_stats_at(&self.runs, &self.settings, today)
    }

    /// Goal progress for the local calendar day
    #[must_use]
    pub fn goal_progress(&self) -> GoalProgressReport {
        goal_progress(&self.stats(), &self.settings)
    }

    /// Goal progress anchored to `today`
    #[must_use]
    pub fn goal_progress_at(&self, today: NaiveDate) -> GoalProgressReport {
        goal_progress(&self.stats_at(today), &self.settings)
    }

    /// Zone boundaries for a candidate max heart rate, or the saved one
    #[must_use]
    pub fn zone_preview(&self, candidate_max_hr: Option<u32>) -> Option<BTreeMap<Zone, (u32, u32)>> {
        let max_hr = candidate_max_hr.or_else(|| self.settings.max_hr())?;
        zone_boundaries_bpm(f64::from(max_hr))
    }

    fn position(&self, id: &RunId) -> AppResult<usize> {
        self.runs
            .iter()
            .position(|run| run.id() == id)
            .ok_or_else(|| AppError::not_found(format!("run {id}")))
    }
}
