// ABOUTME: Scenario tests for the stats engine over realistic run histories
// ABOUTME: Validates window membership, weighted paces, calendar totals, records and goal progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, reference_day, run, run_with_hr};
use runlog_core::models::Settings;
use runlog_intelligence::goals::{goal_progress, TargetSource};
use runlog_intelligence::stats::compute_stats_at;
use runlog_intelligence::zones::Zone;

const EPS: f64 = 1e-9;

#[test]
fn test_single_run_scenario() {
    let runs = vec![run_with_hr("r1", day(2024, 1, 1), 5.0, 1500, 150, Some(170))];
    let settings = Settings {
        max_hr_user: Some(170),
        ..Settings::default()
    };

    let snapshot = compute_stats_at(&runs, &settings, reference_day());

    assert!((snapshot.all_time.avg_pace_sec_per_km.unwrap() - 300.0).abs() < EPS);
    assert_eq!(snapshot.pr_5k_sec, Some(1500.0));
    assert!((snapshot.recovery_bpm.unwrap() - 20.0).abs() < EPS);
    let zone = snapshot.recent_zone(&settings).unwrap();
    assert_eq!(zone.zone, Zone::Z4);
    assert_eq!(snapshot.last_7_days.run_count, 0);
    assert_eq!(snapshot.last_30_days.run_count, 1);
}

#[test]
fn test_all_time_pace_is_distance_weighted() {
    let runs = vec![
        run("a", day(2024, 1, 9), 10.0, 3000),
        run("b", day(2024, 1, 8), 5.0, 2000),
    ];

    let snapshot = compute_stats_at(&runs, &Settings::default(), reference_day());

    let expected = 5000.0 / 15.0;
    assert!((snapshot.all_time.avg_pace_sec_per_km.unwrap() - expected).abs() < EPS);
    assert!((snapshot.last_7_days.avg_pace_sec_per_km.unwrap() - expected).abs() < EPS);
    assert_eq!(snapshot.all_time.duration_sec, 5000);
}

#[test]
fn test_calendar_week_and_month_boundaries() {
    let runs = vec![
        run("monday", day(2024, 1, 8), 6.0, 1800),
        run("sunday", day(2024, 1, 7), 12.0, 3600),
        run("new_year", day(2024, 1, 1), 8.0, 2400),
        run("december", day(2023, 12, 31), 20.0, 6000),
    ];

    let snapshot = compute_stats_at(&runs, &Settings::default(), reference_day());

    assert!((snapshot.km_week - 6.0).abs() < EPS);
    assert!((snapshot.km_month - 26.0).abs() < EPS);
    assert!((snapshot.best_week_km - 20.0).abs() < EPS);
    assert!((snapshot.best_month_km - 26.0).abs() < EPS);
    assert!((snapshot.weekly_totals[&day(2024, 1, 1)] - 20.0).abs() < EPS);
    assert_eq!(snapshot.weekly_totals.len(), 3);
    assert_eq!(snapshot.monthly_totals.len(), 2);
}

#[test]
fn test_window_boundaries_are_inclusive() {
    let runs = vec![
        run("today", day(2024, 1, 10), 5.0, 1500),
        run("seven", day(2024, 1, 4), 5.0, 1500),
        run("eight", day(2024, 1, 3), 5.0, 1500),
        run("thirty", day(2023, 12, 12), 5.0, 1500),
        run("thirty_one", day(2023, 12, 11), 5.0, 1500),
    ];

    let snapshot = compute_stats_at(&runs, &Settings::default(), reference_day());

    assert_eq!(snapshot.last_7_days.run_count, 2);
    assert_eq!(snapshot.last_30_days.run_count, 4);
    assert_eq!(snapshot.last_12_weeks.run_count, 5);
    assert_eq!(snapshot.last_7_days.start, Some(day(2024, 1, 4)));
    assert_eq!(snapshot.last_7_days.end, Some(reference_day()));
    assert_eq!(snapshot.all_time.start, None);
}

#[test]
fn test_weekly_chart_covers_eight_weeks() {
    let runs = vec![
        run("this_week", day(2024, 1, 9), 10.0, 3000),
        run("oldest_shown", day(2023, 11, 22), 7.0, 2100),
        run("too_old", day(2023, 11, 19), 9.0, 2700),
    ];

    let snapshot = compute_stats_at(&runs, &Settings::default(), reference_day());

    assert_eq!(snapshot.weekly_chart.len(), 8);
    let first = snapshot.weekly_chart.first().unwrap();
    let last = snapshot.weekly_chart.last().unwrap();
    assert_eq!(first.week_start, day(2023, 11, 20));
    assert!((first.distance_km - 7.0).abs() < EPS);
    assert_eq!(last.week_start, day(2024, 1, 8));
    assert!((last.distance_km - 10.0).abs() < EPS);
    let shown: f64 = snapshot.weekly_chart.iter().map(|w| w.distance_km).sum();
    assert!((shown - 17.0).abs() < EPS);
}

#[test]
fn test_empty_history_has_no_averages() {
    let snapshot = compute_stats_at(&[], &Settings::default(), reference_day());

    assert_eq!(snapshot.total_runs, 0);
    assert_eq!(snapshot.all_time.avg_pace_sec_per_km, None);
    assert_eq!(snapshot.all_time.avg_hr, None);
    assert_eq!(snapshot.recovery_bpm, None);
    assert_eq!(snapshot.pr_5k_sec, None);
    assert!(snapshot.best_week_km.abs() < EPS);
    assert!(snapshot.weekly_chart.iter().all(|w| w.distance_km.abs() < EPS));
}

#[test]
fn test_goal_progress_targets() {
    let runs = vec![
        run("week", day(2024, 1, 9), 15.0, 4500),
        run("earlier", day(2024, 1, 2), 25.0, 7500),
    ];
    let snapshot = compute_stats_at(&runs, &Settings::default(), reference_day());

    let with_goals = goal_progress(&snapshot, &Settings::default());
    assert_eq!(with_goals.weekly.target_source, TargetSource::UserGoal);
    assert!((with_goals.weekly.progress - 0.5).abs() < EPS);
    assert!((with_goals.weekly.remaining_km - 15.0).abs() < EPS);
    assert!(!with_goals.weekly.achieved);

    let without_goals = goal_progress(&snapshot, &Settings::unset());
    assert_eq!(without_goals.weekly.target_source, TargetSource::PersonalBest);
    assert!((without_goals.weekly.target_km - 25.0).abs() < EPS);
    assert!((without_goals.monthly.target_km - 40.0).abs() < EPS);
    assert!(without_goals.monthly.achieved);
    assert_eq!(without_goals.pace.target_marker, None);
}

#[test]
fn test_heart_rate_gauge_uses_fallback_max() {
    let runs = vec![run_with_hr("r", day(2024, 1, 9), 10.0, 3000, 150, None)];
    let snapshot = compute_stats_at(&runs, &Settings::default(), reference_day());

    let report = goal_progress(&snapshot, &Settings::unset());
    assert!((report.heart_rate.unwrap() - 0.75).abs() < EPS);
}
