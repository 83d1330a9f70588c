// ABOUTME: Persistence boundary for the run collection and settings blobs
// ABOUTME: Pluggable backends (in-memory, JSON files) sharing one tolerant codec
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

//! Storage of the two persisted values: the run list and the settings
//! record.
//!
//! Backends only move text. Decoding is shared and tolerant: stored runs go
//! through sanitization like any import, and settings fall back field by
//! field to defaults. A stored `zones` table is written for older readers
//! and never read back.

/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use file::JsonFileRepository;
pub use memory::MemoryRepository;

use crate::store::merge::sort_runs;
use crate::store::sanitize::sanitize_all;
use async_trait::async_trait;
use runlog_core::errors::AppResult;
use runlog_core::models::{Run, Settings};
use runlog_intelligence::zones::zone_fractions;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::warn;

/// Storage backend for runs and settings
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Load the stored run collection, canonical order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read at all.
    async fn load_runs(&self) -> AppResult<Vec<Run>>;

    /// Replace the stored run collection
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    async fn save_runs(&self, runs: &[Run]) -> AppResult<()>;

    /// Load stored settings, filling gaps from `defaults`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read at all.
    async fn load_settings(&self, defaults: &Settings) -> AppResult<Settings>;

    /// Replace the stored settings
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    async fn save_settings(&self, settings: &Settings) -> AppResult<()>;
}

/// Decode a stored run blob
///
/// Unparsable or non-list blobs load as an empty collection.
#[must_use]
pub fn decode_runs(text: &str) -> Vec<Run> {
    let elements = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(elements)) => elements,
        Ok(_) => {
            warn!("Stored runs are not a list, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(error = %e, "Stored runs are unreadable, starting empty");
            return Vec::new();
        }
    };

    let (mut runs, _) = sanitize_all(elements);
    sort_runs(&mut runs);
    runs
}

/// Encode the run collection for storage
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_runs(runs: &[Run]) -> AppResult<String> {
    Ok(serde_json::to_string(runs)?)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    weekly_goal_km: Option<Value>,
    #[serde(rename = "weeklyKm")]
    legacy_weekly_km: Option<Value>,
    monthly_goal_km: Option<Value>,
    #[serde(rename = "monthlyKm")]
    legacy_monthly_km: Option<Value>,
    target_pace_sec_per_km: Option<Value>,
    #[serde(rename = "paceSeconds")]
    legacy_pace_seconds: Option<Value>,
    max_hr_user: Option<Value>,
}

fn stored_number(primary: Option<&Value>, legacy: Option<&Value>) -> Option<f64> {
    let parsed = match primary.or(legacy)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Decode a stored settings blob
///
/// Invalid fields fall back to `defaults`. A missing or non-positive max
/// heart rate decodes as unset.
#[must_use]
pub fn decode_settings(text: &str, defaults: &Settings) -> Settings {
    let stored = match serde_json::from_str::<StoredSettings>(text) {
        Ok(stored) => stored,
        Err(e) => {
            warn!(error = %e, "Stored settings are unreadable, using defaults");
            return defaults.clone();
        }
    };

    let weekly = stored_number(stored.weekly_goal_km.as_ref(), stored.legacy_weekly_km.as_ref());
    let monthly = stored_number(
        stored.monthly_goal_km.as_ref(),
        stored.legacy_monthly_km.as_ref(),
    );
    let pace = stored_number(
        stored.target_pace_sec_per_km.as_ref(),
        stored.legacy_pace_seconds.as_ref(),
    );
    let max_hr = stored_number(stored.max_hr_user.as_ref(), None);

    Settings {
        weekly_goal_km: weekly
            .filter(|km| *km >= 0.0)
            .unwrap_or(defaults.weekly_goal_km),
        monthly_goal_km: monthly
            .filter(|km| *km >= 0.0)
            .unwrap_or(defaults.monthly_goal_km),
        target_pace_sec_per_km: pace
            .filter(|p| *p > 0.0 && *p <= f64::from(u32::MAX))
            .map_or(defaults.target_pace_sec_per_km, |p| p.round() as u32),
        max_hr_user: max_hr
            .filter(|hr| *hr > 0.0 && *hr <= f64::from(u32::MAX))
            .map(|hr| hr.round() as u32),
    }
}

/// Encode settings for storage, including the derived zone table
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_settings(settings: &Settings) -> AppResult<String> {
    let mut record = match serde_json::to_value(settings)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let zones: Map<String, Value> = zone_fractions()
        .into_iter()
        .map(|(zone, (lower, upper))| (zone.key().to_owned(), json!([lower, upper])))
        .collect();
    record.insert("zones".to_owned(), Value::Object(zones));
    Ok(serde_json::to_string(&Value::Object(record))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_list_runs_load_empty() {
        assert!(decode_runs("{\"foo\":1}").is_empty());
        assert!(decode_runs("not json").is_empty());
    }

    #[test]
    fn test_legacy_settings_names() {
        let settings = decode_settings(
            r#"{"weeklyKm": 25, "monthlyKm": "90", "paceSeconds": 310.4}"#,
            &Settings::default(),
        );
        assert!((settings.weekly_goal_km - 25.0).abs() < f64::EPSILON);
        assert!((settings.monthly_goal_km - 90.0).abs() < f64::EPSILON);
        assert_eq!(settings.target_pace_sec_per_km, 310);
        assert_eq!(settings.max_hr_user, None);
    }

    #[test]
    fn test_invalid_settings_fields_use_defaults() {
        let defaults = Settings::default();
        let settings = decode_settings(
            r#"{"weeklyGoalKm": -3, "targetPaceSecPerKm": 0, "maxHrUser": 181.6}"#,
            &defaults,
        );
        assert!((settings.weekly_goal_km - defaults.weekly_goal_km).abs() < f64::EPSILON);
        assert_eq!(settings.target_pace_sec_per_km, defaults.target_pace_sec_per_km);
        assert_eq!(settings.max_hr_user, Some(182));
    }

    #[test]
    fn test_encoded_settings_carry_zone_table() {
        let encoded = encode_settings(&Settings::default()).unwrap();
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["zones"]["z3"], json!([0.7, 0.8]));
        assert_eq!(value["maxHrUser"], 186);
        assert_eq!(decode_settings(&encoded, &Settings::unset()), Settings::default());
    }
}
