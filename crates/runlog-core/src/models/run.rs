// ABOUTME: Run model with identifier, date, distance, duration, derived pace, and heart rate
// ABOUTME: Pace is always derived from duration and distance when a run is constructed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, immutable run identifier
///
/// Fresh identifiers are UUID v4 strings. Imported identifiers are kept as-is
/// so that re-importing a backup merges instead of duplicating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RunId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RunId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Round a distance to the canonical two decimals
///
/// A positive distance that would round to zero keeps its raw value, so a
/// sanitized run never loses its (positive) distance on a second pass.
#[must_use]
pub fn round_distance(distance_km: f64) -> f64 {
    let rounded = (distance_km * 100.0).round() / 100.0;
    if rounded > 0.0 {
        rounded
    } else {
        distance_km
    }
}

/// Derive pace in whole seconds per km
///
/// Returns 0 when the distance is not positive; callers validate distance
/// before constructing runs.
#[must_use]
pub fn derive_pace(duration_sec: u32, distance_km: f64) -> u32 {
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return 0;
    }
    (f64::from(duration_sec) / distance_km).round() as u32
}

/// One completed run
///
/// Fields are private so the redundant `pace_sec_per_km` can never drift
/// from `duration_sec / distance_km`.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use runlog_core::models::{Run, RunId};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let run = Run::new(RunId::from("r1"), date, 5.0, 1500).with_heart_rate(Some(150), Some(170));
///
/// assert_eq!(run.pace_sec_per_km(), 300);
/// assert_eq!(run.heart_rate_reserve(), Some(20));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    /// Unique identifier
    id: RunId,
    /// Calendar day of the run
    date: NaiveDate,
    /// Distance in kilometres, two decimals
    distance_km: f64,
    /// Elapsed time in seconds
    duration_sec: u32,
    /// Derived pace in seconds per kilometre
    pace_sec_per_km: u32,
    /// Average heart rate (bpm)
    avg_hr: Option<u32>,
    /// Maximum heart rate (bpm)
    max_hr: Option<u32>,
    /// Free text, not used by the statistics engine
    notes: String,
}

impl Run {
    /// Create a run without heart rate data
    #[must_use]
    pub fn new(id: RunId, date: NaiveDate, distance_km: f64, duration_sec: u32) -> Self {
        let distance_km = round_distance(distance_km);
        Self {
            id,
            date,
            distance_km,
            duration_sec,
            pace_sec_per_km: derive_pace(duration_sec, distance_km),
            avg_hr: None,
            max_hr: None,
            notes: String::new(),
        }
    }

    /// Attach average and maximum heart rate
    #[must_use]
    pub fn with_heart_rate(mut self, avg_hr: Option<u32>, max_hr: Option<u32>) -> Self {
        self.avg_hr = avg_hr;
        self.max_hr = max_hr;
        self
    }

    /// Attach free-text notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Run identifier
    #[must_use]
    pub const fn id(&self) -> &RunId {
        &self.id
    }

    /// Day of the run
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Distance in kilometres
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Duration in seconds
    #[must_use]
    pub const fn duration_sec(&self) -> u32 {
        self.duration_sec
    }

    /// Pace in seconds per kilometre
    #[must_use]
    pub const fn pace_sec_per_km(&self) -> u32 {
        self.pace_sec_per_km
    }

    /// Average heart rate, if recorded
    #[must_use]
    pub const fn avg_hr(&self) -> Option<u32> {
        self.avg_hr
    }

    /// Maximum heart rate, if recorded
    #[must_use]
    pub const fn max_hr(&self) -> Option<u32> {
        self.max_hr
    }

    /// Notes
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Whether the run contributes to heart rate aggregates
    #[must_use]
    pub const fn has_heart_rate(&self) -> bool {
        self.avg_hr.is_some()
    }

    /// Gap between maximum and average heart rate when both are recorded
    #[must_use]
    pub fn heart_rate_reserve(&self) -> Option<i64> {
        match (self.avg_hr, self.max_hr) {
            (Some(avg), Some(max)) => Some(i64::from(max) - i64::from(avg)),
            _ => None,
        }
    }
}
