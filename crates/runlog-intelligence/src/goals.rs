// ABOUTME: Goal-relative progress for distance targets, pace gauges, and heart rate
// ABOUTME: Falls back to personal bests and fixed defaults when the user set no goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use crate::stats::StatsSnapshot;
use crate::zones::Zone;
use runlog_core::constants::defaults::{FALLBACK_MONTHLY_KM, FALLBACK_WEEKLY_KM};
use runlog_core::constants::heart_rate::GAUGE_FALLBACK_MAX_HR;
use runlog_core::constants::pace::{FASTEST_PLAUSIBLE_SEC_PER_KM, SLOWEST_PLAUSIBLE_SEC_PER_KM};
use runlog_core::models::Settings;
use serde::Serialize;

/// Where a distance target came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSource {
    /// Goal configured in settings
    UserGoal,
    /// Best recorded week or month
    PersonalBest,
    /// Built-in fallback
    Default,
}

/// Progress toward one distance target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceGoalProgress {
    /// Target in km, always positive
    pub target_km: f64,
    /// Origin of the target
    pub target_source: TargetSource,
    /// Distance covered so far
    pub actual_km: f64,
    /// Distance still missing, never negative
    pub remaining_km: f64,
    /// `actual / target` clamped to `[0, 1]`
    pub progress: f64,
    /// Whether the target is reached
    pub achieved: bool,
}

impl DistanceGoalProgress {
    fn new(actual_km: f64, goal: Option<f64>, best: f64, fallback: f64) -> Self {
        let (target_km, target_source) = match goal {
            Some(goal) => (goal, TargetSource::UserGoal),
            None if best > 0.0 => (best, TargetSource::PersonalBest),
            None => (fallback, TargetSource::Default),
        };
        Self {
            target_km,
            target_source,
            actual_km,
            remaining_km: (target_km - actual_km).max(0.0),
            progress: clamp_unit(actual_km / target_km),
            achieved: actual_km >= target_km,
        }
    }
}

/// Gauge positions for the pace panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaceProgress {
    /// All-time average pace gauge
    pub all_time: Option<f64>,
    /// 30-day average pace gauge
    pub last_30_days: Option<f64>,
    /// 7-day average pace gauge
    pub last_7_days: Option<f64>,
    /// Marker for the configured target pace
    pub target_marker: Option<f64>,
}

/// Goal progress derived from a snapshot and the current settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgressReport {
    /// Current week against the weekly target
    pub weekly: DistanceGoalProgress,
    /// Current month against the monthly target
    pub monthly: DistanceGoalProgress,
    /// Pace gauges, faster is fuller
    pub pace: PaceProgress,
    /// 30-day average heart rate as a share of max heart rate
    pub heart_rate: Option<f64>,
    /// Upper edge of the tempo zone on the heart rate gauge
    pub heart_rate_marker: f64,
}

/// Position of a pace on a gauge running from slowest (0) to fastest (1)
///
/// Returns `None` for missing or non-positive paces.
#[must_use]
pub fn pace_gauge_progress(pace_sec_per_km: Option<f64>) -> Option<f64> {
    let pace = pace_sec_per_km.filter(|p| p.is_finite() && *p > 0.0)?;
    let span = SLOWEST_PLAUSIBLE_SEC_PER_KM - FASTEST_PLAUSIBLE_SEC_PER_KM;
    Some(1.0 - clamp_unit((pace - FASTEST_PLAUSIBLE_SEC_PER_KM) / span))
}

/// Compute progress against the configured goals
#[must_use]
pub fn goal_progress(snapshot: &StatsSnapshot, settings: &Settings) -> GoalProgressReport {
    let weekly = DistanceGoalProgress::new(
        snapshot.km_week,
        settings.weekly_goal(),
        snapshot.best_week_km,
        FALLBACK_WEEKLY_KM,
    );
    let monthly = DistanceGoalProgress::new(
        snapshot.km_month,
        settings.monthly_goal(),
        snapshot.best_month_km,
        FALLBACK_MONTHLY_KM,
    );

    let pace = PaceProgress {
        all_time: pace_gauge_progress(snapshot.all_time.avg_pace_sec_per_km),
        last_30_days: pace_gauge_progress(snapshot.last_30_days.avg_pace_sec_per_km),
        last_7_days: pace_gauge_progress(snapshot.last_7_days.avg_pace_sec_per_km),
        target_marker: pace_gauge_progress(settings.target_pace().map(f64::from)),
    };

    let max_hr = settings.max_hr().unwrap_or(GAUGE_FALLBACK_MAX_HR);
    let heart_rate = snapshot
        .last_30_days
        .avg_hr
        .map(|avg| clamp_unit(avg / f64::from(max_hr)));

    GoalProgressReport {
        weekly,
        monthly,
        pace,
        heart_rate,
        heart_rate_marker: clamp_unit(Zone::Z3.fractions().1),
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
