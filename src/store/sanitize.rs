// ABOUTME: Normalization of loosely typed run records from imports and stored state
// ABOUTME: Rejects records without a usable date, distance, or duration and re-derives pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

//! Run sanitization.
//!
//! Sanitization is deliberately looser than entry-form validation: it only
//! requires a date plus a positive distance and duration, so historical or
//! imported data outside the entry-form ranges is still accepted.

use chrono::NaiveDate;
use runlog_core::models::{Run, RunId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// A run record as found in a backup file or stored blob
///
/// Every field is kept as raw JSON so that numbers encoded as strings, and
/// the legacy `distance` / `time` names, survive deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRun {
    /// Identifier, string or number
    #[serde(default)]
    pub id: Option<Value>,
    /// `YYYY-MM-DD`, an ISO timestamp is truncated to its day
    #[serde(default)]
    pub date: Option<Value>,
    /// Distance in km
    #[serde(default)]
    pub distance_km: Option<Value>,
    /// Legacy name for `distanceKm`
    #[serde(default, rename = "distance", skip_serializing_if = "Option::is_none")]
    pub legacy_distance: Option<Value>,
    /// Duration in seconds
    #[serde(default)]
    pub duration_sec: Option<Value>,
    /// Legacy name for `durationSec`
    #[serde(default, rename = "time", skip_serializing_if = "Option::is_none")]
    pub legacy_time: Option<Value>,
    /// Stored pace, ignored when sanitizing
    #[serde(default)]
    pub pace_sec_per_km: Option<Value>,
    /// Average heart rate
    #[serde(default)]
    pub avg_hr: Option<Value>,
    /// Maximum heart rate
    #[serde(default)]
    pub max_hr: Option<Value>,
    /// Free text
    #[serde(default)]
    pub notes: Option<Value>,
}

impl From<&Run> for RawRun {
    fn from(run: &Run) -> Self {
        Self {
            id: Some(Value::from(run.id().as_str())),
            date: Some(Value::from(run.date().to_string())),
            distance_km: Some(Value::from(run.distance_km())),
            legacy_distance: None,
            duration_sec: Some(Value::from(run.duration_sec())),
            legacy_time: None,
            pace_sec_per_km: Some(Value::from(run.pace_sec_per_km())),
            avg_hr: run.avg_hr().map(Value::from),
            max_hr: run.max_hr().map(Value::from),
            notes: Some(Value::from(run.notes())),
        }
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

fn date(value: Option<&Value>) -> Option<NaiveDate> {
    let Value::String(text) = value? else {
        return None;
    };
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(text.get(..10)?, "%Y-%m-%d").ok())
}

fn identifier(value: Option<&Value>) -> RunId {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => RunId::from(s.trim()),
        Some(Value::Number(n)) => RunId::from(n.to_string()),
        _ => RunId::generate(),
    }
}

fn heart_rate(value: Option<&Value>) -> Option<u32> {
    let rounded = number(value)?.round();
    (1.0..=f64::from(u32::MAX))
        .contains(&rounded)
        .then_some(rounded as u32)
}

/// Turn a raw record into a canonical [`Run`], or reject it
///
/// Pace is always recomputed from duration and distance; a stored pace is
/// treated as a stale cache.
#[must_use]
pub fn sanitize(raw: &RawRun) -> Option<Run> {
    let date = date(raw.date.as_ref())?;

    let distance_km = number(raw.distance_km.as_ref().or(raw.legacy_distance.as_ref()))?;
    if distance_km <= 0.0 {
        return None;
    }

    let duration = number(raw.duration_sec.as_ref().or(raw.legacy_time.as_ref()))?;
    if duration <= 0.0 || duration.round() > f64::from(u32::MAX) {
        return None;
    }
    let duration_sec = duration.round() as u32;
    if duration_sec == 0 {
        return None;
    }

    let notes = match &raw.notes {
        Some(Value::String(notes)) => notes.clone(),
        _ => String::new(),
    };

    Some(
        Run::new(identifier(raw.id.as_ref()), date, distance_km, duration_sec)
            .with_heart_rate(heart_rate(raw.avg_hr.as_ref()), heart_rate(raw.max_hr.as_ref()))
            .with_notes(notes),
    )
}

/// Sanitize a list of JSON values
///
/// Only JSON objects are considered run records; any other element is
/// rejected. Returns the surviving runs and the number of rejected elements.
#[must_use]
pub fn sanitize_all(values: Vec<Value>) -> (Vec<Run>, usize) {
    let total = values.len();
    let runs: Vec<Run> = values
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|value| serde_json::from_value::<RawRun>(value).ok())
        .filter_map(|raw| sanitize(&raw))
        .collect();

    let rejected = total - runs.len();
    if rejected > 0 {
        warn!(rejected, accepted = runs.len(), "Discarded invalid run records");
    } else {
        debug!(accepted = runs.len(), "Sanitized run records");
    }
    (runs, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRun {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_string_numbers_are_accepted() {
        let run = sanitize(&raw(json!({
            "id": "x", "date": "2024-01-01", "distanceKm": "5.004", "durationSec": "1500"
        })))
        .unwrap();
        assert!((run.distance_km() - 5.0).abs() < f64::EPSILON);
        assert_eq!(run.duration_sec(), 1500);
    }

    #[test]
    fn test_heart_rates_are_coerced() {
        let run = sanitize(&raw(json!({
            "date": "2024-01-01", "distanceKm": 5, "durationSec": 1500,
            "avgHr": 149.6, "maxHr": "bad"
        })))
        .unwrap();
        assert_eq!(run.avg_hr(), Some(150));
        assert_eq!(run.max_hr(), None);
    }

    #[test]
    fn test_numeric_id_and_timestamp_date() {
        let run = sanitize(&raw(json!({
            "id": 42, "date": "2024-01-01T07:30:00.000Z", "distanceKm": 5, "durationSec": 1500
        })))
        .unwrap();
        assert_eq!(run.id().as_str(), "42");
        assert_eq!(run.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_sub_second_duration_is_rejected() {
        assert!(sanitize(&raw(json!({
            "date": "2024-01-01", "distanceKm": 5, "durationSec": 0.2
        })))
        .is_none());
    }
}
