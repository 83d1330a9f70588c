// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Validation limits, heart rate zone table, window sizes, and default settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace, so call sites read as `run_limits::MAX_DISTANCE_KM`.

/// Hard limits applied to live entry-form input
pub mod run_limits {
    /// Distance must be strictly greater than this (km)
    pub const MIN_DISTANCE_KM: f64 = 0.0;
    /// Distance must be strictly below this (km)
    pub const MAX_DISTANCE_KM: f64 = 200.0;
    /// Shortest accepted duration, inclusive (seconds)
    pub const MIN_DURATION_SEC: u32 = 60;
    /// Longest accepted duration, inclusive (seconds)
    pub const MAX_DURATION_SEC: u32 = 86_400;
}

/// Heart rate bounds for entry-form and settings validation
pub mod heart_rate {
    /// Lowest accepted average heart rate (bpm)
    pub const MIN_AVG_HR: u32 = 30;
    /// Highest accepted average heart rate (bpm)
    pub const MAX_AVG_HR: u32 = 240;
    /// Lowest accepted maximum heart rate on a run (bpm)
    pub const MIN_MAX_HR: u32 = 30;
    /// Highest accepted maximum heart rate on a run (bpm)
    pub const MAX_MAX_HR: u32 = 260;
    /// Lowest accepted user max heart rate in settings (bpm)
    pub const MIN_USER_MAX_HR: u32 = 100;
    /// Highest accepted user max heart rate in settings (bpm)
    pub const MAX_USER_MAX_HR: u32 = 240;
    /// Max heart rate assumed for gauge scaling when the user has not set one
    pub const GAUGE_FALLBACK_MAX_HR: u32 = 200;
    /// Intercept of the default max heart rate estimate
    pub const ESTIMATE_INTERCEPT: f64 = 207.0;
    /// Per-year slope of the default max heart rate estimate
    pub const ESTIMATE_SLOPE: f64 = 0.7;
    /// Age assumed for the initial default max heart rate
    pub const DEFAULT_ASSUMED_AGE: u32 = 30;
}

/// Soft pace sanity range (seconds per km)
pub mod pace {
    /// Faster than 2:45/km is implausible
    pub const FASTEST_PLAUSIBLE_SEC_PER_KM: f64 = 165.0;
    /// Slower than 15:00/km is implausible
    pub const SLOWEST_PLAUSIBLE_SEC_PER_KM: f64 = 900.0;
}

/// Heart rate training zone table as fractions of max heart rate
pub mod zones {
    /// Tolerance applied when a ratio lands on a zone boundary
    pub const BOUNDARY_TOLERANCE: f64 = 0.0001;
    /// Zone 1 `[lower, upper)`
    pub const Z1: (f64, f64) = (0.50, 0.60);
    /// Zone 2 `[lower, upper)`
    pub const Z2: (f64, f64) = (0.60, 0.70);
    /// Zone 3 `[lower, upper)`
    pub const Z3: (f64, f64) = (0.70, 0.80);
    /// Zone 4 `[lower, upper)`
    pub const Z4: (f64, f64) = (0.80, 0.90);
    /// Zone 5 `[lower, upper]`, open-ended upward when classifying
    pub const Z5: (f64, f64) = (0.90, 1.00);
}

/// Rolling window lengths, counted in days back from today (inclusive)
pub mod windows {
    /// Last 7 days: today and the 6 before
    pub const LAST_7_DAYS_OFFSET: i64 = 6;
    /// Last 30 days: today and the 29 before
    pub const LAST_30_DAYS_OFFSET: i64 = 29;
    /// Last 12 weeks: today and the 83 before
    pub const LAST_12_WEEKS_OFFSET: i64 = 83;
    /// Weeks shown in the weekly distance chart (current week included)
    pub const WEEKLY_CHART_WEEKS: i64 = 8;
    /// Distance that qualifies a run for the 5K record (km)
    pub const PR_5K_DISTANCE_KM: f64 = 5.0;
}

/// Defaults applied when no settings have been stored
pub mod defaults {
    /// Weekly distance goal (km)
    pub const WEEKLY_GOAL_KM: f64 = 30.0;
    /// Monthly distance goal (km)
    pub const MONTHLY_GOAL_KM: f64 = 120.0;
    /// Target pace (seconds per km), 5:30/km
    pub const TARGET_PACE_SEC_PER_KM: u32 = 330;
    /// Weekly reference distance when neither a goal nor history exists (km)
    pub const FALLBACK_WEEKLY_KM: f64 = 20.0;
    /// Monthly reference distance when neither a goal nor history exists (km)
    pub const FALLBACK_MONTHLY_KM: f64 = 80.0;
}

/// Placeholder shown wherever a metric has no data
pub const NO_DATA: &str = "—";
