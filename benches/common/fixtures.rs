// ABOUTME: Benchmark fixtures for generating realistic run histories
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

//! Benchmark fixtures for generating run histories.

use chrono::{Duration, NaiveDate};
use runlog_core::models::{Run, RunId};
use serde_json::Value;

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One season of running (100 runs)
    Season,
    /// Several years of running (1000 runs)
    Years,
    /// Stress dataset (10000 runs)
    Stress,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Season => 100,
            Self::Years => 1_000,
            Self::Stress => 10_000,
        }
    }
}

/// Fixed reference day so results do not drift with the wall clock
#[must_use]
pub fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default()
}

/// Generate one run per day going backwards from the reference day
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_runs(size: HistorySize) -> Vec<Run> {
    let today = reference_day();
    (0..size.count())
        .map(|index| {
            let distance_km = 4.0 + ((index * 251) % 1800) as f64 / 100.0;
            let pace = 270 + ((index * 37) % 120) as u32;
            let duration_sec = (distance_km * f64::from(pace)).round() as u32;
            let avg_hr = 135 + ((index * 17) % 35) as u32;
            let run = Run::new(
                RunId::from(format!("bench_run_{index}")),
                today - Duration::days(index as i64),
                distance_km,
                duration_sec,
            );
            if index % 5 == 0 {
                run
            } else {
                run.with_heart_rate(Some(avg_hr), Some(avg_hr + 20))
            }
        })
        .collect()
}

/// Runs encoded as the loose JSON values an import file holds
#[must_use]
pub fn generate_import_values(size: HistorySize) -> Vec<Value> {
    generate_runs(size)
        .iter()
        .filter_map(|run| serde_json::to_value(run).ok())
        .collect()
}
