// ABOUTME: Stats engine turning an unordered run collection into time-windowed aggregates
// ABOUTME: Computes window summaries, weekly and monthly totals, bests, recovery, and the 5K PR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

//! Statistics snapshot computation.
//!
//! [`compute_stats_at`] is pure: the same runs, settings and reference day
//! always yield the same snapshot. [`compute_stats`] anchors it to the local
//! calendar day. Every ratio is guarded so an empty denominator produces
//! `None` instead of `NaN` or infinity.

use crate::calendar::{week_start, DateWindow, YearMonth};
use crate::zones::{classify, ZoneClassification};
use chrono::{Duration, Local, NaiveDate};
use runlog_core::constants::windows::{
    LAST_12_WEEKS_OFFSET, LAST_30_DAYS_OFFSET, LAST_7_DAYS_OFFSET, PR_5K_DISTANCE_KM,
    WEEKLY_CHART_WEEKS,
};
use runlog_core::models::{Run, Settings};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregates over one date window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSummary {
    /// First day of the window, `None` when unbounded
    pub start: Option<NaiveDate>,
    /// Last day of the window, `None` when unbounded
    pub end: Option<NaiveDate>,
    /// Runs inside the window
    pub run_count: usize,
    /// Summed distance in km
    pub distance_km: f64,
    /// Summed duration in seconds
    pub duration_sec: u64,
    /// `duration / distance`, `None` when no distance was covered
    pub avg_pace_sec_per_km: Option<f64>,
    /// Mean average heart rate over runs that recorded one
    pub avg_hr: Option<f64>,
    /// Runs with an average heart rate, ascending by date
    pub hr_samples: Vec<Run>,
}

impl WindowSummary {
    /// Duration total in hours
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.duration_sec as f64 / 3600.0
    }
}

/// Distance covered in one Monday-anchored week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekTotal {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Summed distance in km
    pub distance_km: f64,
}

/// Everything the presentation layer needs, recomputed on every change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Day all windows are anchored to
    pub reference_day: NaiveDate,
    /// Distance in the current week
    pub km_week: f64,
    /// Distance in the current calendar month
    pub km_month: f64,
    /// `[today - 6, today]`
    pub last_7_days: WindowSummary,
    /// `[today - 29, today]`
    pub last_30_days: WindowSummary,
    /// `[today - 83, today]`
    pub last_12_weeks: WindowSummary,
    /// Every run, including future-dated ones
    pub all_time: WindowSummary,
    /// Mean of `max_hr - avg_hr` over the last 30 days
    pub recovery_bpm: Option<f64>,
    /// Highest single-week distance, 0 without runs
    pub best_week_km: f64,
    /// Highest single-month distance, 0 without runs
    pub best_month_km: f64,
    /// Fastest pace-projected 5 km time in seconds
    pub pr_5k_sec: Option<f64>,
    /// Number of runs
    pub total_runs: usize,
    /// Distance over all runs
    pub total_distance_km: f64,
    /// Distance per week, keyed by Monday
    pub weekly_totals: BTreeMap<NaiveDate, f64>,
    /// Distance per calendar month
    pub monthly_totals: BTreeMap<YearMonth, f64>,
    /// Current week and the seven before it, oldest first
    pub weekly_chart: Vec<WeekTotal>,
}

impl StatsSnapshot {
    /// Zone of the 30-day average heart rate for a max heart rate
    #[must_use]
    pub fn recent_zone(&self, settings: &Settings) -> Option<ZoneClassification> {
        let avg_hr = self.last_30_days.avg_hr?;
        let max_hr = settings.max_hr()?;
        classify(avg_hr, f64::from(max_hr))
    }
}

#[derive(Default)]
struct WindowAccumulator {
    run_count: usize,
    distance_km: f64,
    duration_sec: u64,
    hr_sum: f64,
    hr_count: u32,
    hr_samples: Vec<Run>,
}

impl WindowAccumulator {
    fn add(&mut self, run: &Run) {
        self.run_count += 1;
        self.distance_km += run.distance_km();
        self.duration_sec += u64::from(run.duration_sec());
        if let Some(hr) = run.avg_hr() {
            self.hr_sum += f64::from(hr);
            self.hr_count += 1;
            self.hr_samples.push(run.clone());
        }
    }

    fn finish(mut self, window: DateWindow) -> WindowSummary {
        self.hr_samples.sort_by_key(Run::date);
        let avg_pace_sec_per_km =
            (self.distance_km > 0.0).then(|| self.duration_sec as f64 / self.distance_km);
        let avg_hr = (self.hr_count > 0).then(|| self.hr_sum / f64::from(self.hr_count));
        WindowSummary {
            start: window.start,
            end: window.end,
            run_count: self.run_count,
            distance_km: self.distance_km,
            duration_sec: self.duration_sec,
            avg_pace_sec_per_km,
            avg_hr,
            hr_samples: self.hr_samples,
        }
    }
}

/// Compute statistics anchored to the local calendar day
#[must_use]
pub fn compute_stats(runs: &[Run], settings: &Settings) -> StatsSnapshot {
    compute_stats_at(runs, settings, Local::now().date_naive())
}

/// Compute statistics anchored to `today`
///
/// Settings are accepted for parity with the presentation pipeline; goal
/// relative figures are derived separately by [`crate::goals::goal_progress`].
#[must_use]
pub fn compute_stats_at(runs: &[Run], _settings: &Settings, today: NaiveDate) -> StatsSnapshot {
    let windows = [
        DateWindow::ending_at(today, LAST_7_DAYS_OFFSET),
        DateWindow::ending_at(today, LAST_30_DAYS_OFFSET),
        DateWindow::ending_at(today, LAST_12_WEEKS_OFFSET),
        DateWindow::all_time(),
    ];
    let mut accumulators: [WindowAccumulator; 4] = Default::default();

    let current_week = week_start(today);
    let current_month = YearMonth::of(today);
    let mut km_week = 0.0;
    let mut km_month = 0.0;
    let mut recovery_sum = 0.0;
    let mut recovery_count = 0_u32;
    let mut pr_5k_sec: Option<f64> = None;
    let mut weekly_totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut monthly_totals: BTreeMap<YearMonth, f64> = BTreeMap::new();

    for run in runs {
        let date = run.date();
        let distance = run.distance_km();

        for (window, accumulator) in windows.iter().zip(accumulators.iter_mut()) {
            if window.contains(date) {
                accumulator.add(run);
            }
        }

        let week = week_start(date);
        if week == current_week {
            km_week += distance;
        }
        let month = YearMonth::of(date);
        if month == current_month {
            km_month += distance;
        }
        *weekly_totals.entry(week).or_insert(0.0) += distance;
        *monthly_totals.entry(month).or_insert(0.0) += distance;

        if windows[1].contains(date) {
            if let Some(reserve) = run.heart_rate_reserve() {
                recovery_sum += reserve as f64;
                recovery_count += 1;
            }
        }

        if distance >= PR_5K_DISTANCE_KM && run.pace_sec_per_km() > 0 {
            let projected = f64::from(run.pace_sec_per_km()) * PR_5K_DISTANCE_KM;
            pr_5k_sec = Some(pr_5k_sec.map_or(projected, |best| best.min(projected)));
        }
    }

    let weekly_chart = (0..WEEKLY_CHART_WEEKS)
        .rev()
        .map(|weeks_back| {
            let start = current_week - Duration::weeks(weeks_back);
            WeekTotal {
                week_start: start,
                distance_km: weekly_totals.get(&start).copied().unwrap_or(0.0),
            }
        })
        .collect();

    let [last_7, last_30, last_12_weeks, all_time] = accumulators;
    let [w7, w30, w84, w_all] = windows;
    let all_time = all_time.finish(w_all);

    debug!(
        runs = runs.len(),
        reference_day = %today,
        weeks = weekly_totals.len(),
        "Computed stats snapshot"
    );

    StatsSnapshot {
        reference_day: today,
        km_week,
        km_month,
        last_7_days: last_7.finish(w7),
        last_30_days: last_30.finish(w30),
        last_12_weeks: last_12_weeks.finish(w84),
        recovery_bpm: (recovery_count > 0).then(|| recovery_sum / f64::from(recovery_count)),
        best_week_km: max_total(weekly_totals.values()),
        best_month_km: max_total(monthly_totals.values()),
        pr_5k_sec,
        total_runs: all_time.run_count,
        total_distance_km: all_time.distance_km,
        all_time,
        weekly_totals,
        monthly_totals,
        weekly_chart,
    }
}

fn max_total<'a>(totals: impl Iterator<Item = &'a f64>) -> f64 {
    totals.copied().fold(0.0, f64::max)
}
