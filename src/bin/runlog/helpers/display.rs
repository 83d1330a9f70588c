// ABOUTME: Output formatting helpers for the runlog CLI
// ABOUTME: Renders run tables, the stats dashboard, zones, settings and import results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use runlog::store::{ImportSummary, SubmitOutcome};
use runlog_core::constants::NO_DATA;
use runlog_core::formatters::{
    format_distance, format_duration, format_goal_pace, format_heart_rate, format_hours,
    format_km_value, format_pace, format_pace_short,
};
use runlog_core::models::{Run, Settings};
use runlog_intelligence::goals::{DistanceGoalProgress, GoalProgressReport};
use runlog_intelligence::stats::{StatsSnapshot, WindowSummary};
use runlog_intelligence::zones::{describe_heart_rate, Zone};
use std::collections::BTreeMap;

const CHART_WIDTH: f64 = 40.0;
const GAUGE_WIDTH: usize = 20;

fn optional_bpm(value: Option<u32>) -> String {
    value.map_or_else(|| NO_DATA.to_owned(), |hr| hr.to_string())
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Text gauge of `GAUGE_WIDTH` cells with a `|` at the marker position
fn gauge(fraction: f64, marker: f64) -> String {
    let filled = (fraction * GAUGE_WIDTH as f64).round() as usize;
    let marker_cell = ((marker * GAUGE_WIDTH as f64).round() as usize).min(GAUGE_WIDTH - 1);
    (0..GAUGE_WIDTH)
        .map(|cell| {
            if cell == marker_cell {
                '|'
            } else if cell < filled {
                '#'
            } else {
                '.'
            }
        })
        .collect()
}

/// Display runs as a table, newest first
pub fn display_run_table(runs: &[Run], settings: &Settings) {
    if runs.is_empty() {
        println!("No runs yet.");
        return;
    }

    println!(
        "{:<36}  {:<10}  {:>9}  {:>8}  {:>6}  {:>4}  {:>4}  Zone",
        "ID", "Date", "Distance", "Time", "Pace", "Avg", "Max"
    );
    println!("{}", "-".repeat(100));
    for run in runs {
        let zone = describe_heart_rate(run.avg_hr().map(f64::from), settings.max_hr());
        println!(
            "{:<36}  {:<10}  {:>9}  {:>8}  {:>6}  {:>4}  {:>4}  {zone}",
            run.id(),
            run.date(),
            format_distance(run.distance_km()),
            format_duration(run.duration_sec()),
            format_pace_short(Some(f64::from(run.pace_sec_per_km()))),
            optional_bpm(run.avg_hr()),
            optional_bpm(run.max_hr()),
        );
        if !run.notes().is_empty() {
            println!("{:<36}  {}", "", run.notes());
        }
    }
}

/// Display an accepted submission and its advisories
pub fn display_submit_outcome(headline: &str, outcome: &SubmitOutcome) {
    let run = &outcome.run;
    println!("{headline}: {}", run.id());
    println!(
        "   {}  {}  {}  {}",
        run.date(),
        format_distance(run.distance_km()),
        format_duration(run.duration_sec()),
        format_pace(Some(f64::from(run.pace_sec_per_km()))),
    );
    for advisory in &outcome.advisories {
        println!("WARNING {advisory}");
    }
}

fn display_window(name: &str, window: &WindowSummary) {
    println!(
        "{name:<14}  {:>4}  {:>9}  {:>6}  {:>12}  {:>8}",
        window.run_count,
        format_distance(window.distance_km),
        format_hours(window.hours()),
        format_pace(window.avg_pace_sec_per_km),
        format_heart_rate(window.avg_hr),
    );
}

fn display_goal(name: &str, goal: &DistanceGoalProgress) {
    let status = if goal.achieved {
        "achieved".to_owned()
    } else {
        format!("{} km to go", format_km_value(goal.remaining_km))
    };
    println!(
        "{name:<8} {} / {} km  ({})  {status}",
        format_km_value(goal.actual_km),
        format_km_value(goal.target_km),
        percent(goal.progress),
    );
}

/// Display the statistics dashboard
pub fn display_dashboard(
    snapshot: &StatsSnapshot,
    report: &GoalProgressReport,
    settings: &Settings,
    latest: Option<&Run>,
) {
    println!("\nRunlog dashboard for {}", snapshot.reference_day);
    println!("{}", "=".repeat(64));
    match latest {
        Some(run) => println!(
            "Last run {}: {} in {} ({})",
            run.date(),
            format_distance(run.distance_km()),
            format_duration(run.duration_sec()),
            format_pace(Some(f64::from(run.pace_sec_per_km()))),
        ),
        None => println!("No runs yet. Log one with `runlog add`."),
    }

    println!("\nGOALS");
    display_goal("Week", &report.weekly);
    display_goal("Month", &report.monthly);
    let target = settings
        .target_pace()
        .map_or_else(|| NO_DATA.to_owned(), format_goal_pace);
    println!(
        "Pace     target {target}, last 30 days {}",
        format_pace(snapshot.last_30_days.avg_pace_sec_per_km)
    );

    println!("\nWINDOWS");
    println!(
        "{:<14}  {:>4}  {:>9}  {:>6}  {:>12}  {:>8}",
        "", "Runs", "Distance", "Hours", "Avg pace", "Avg HR"
    );
    display_window("Last 7 days", &snapshot.last_7_days);
    display_window("Last 30 days", &snapshot.last_30_days);
    display_window("Last 12 weeks", &snapshot.last_12_weeks);
    display_window("All time", &snapshot.all_time);

    println!("\nRECORDS");
    println!("Best week:       {} km", format_km_value(snapshot.best_week_km));
    println!("Best month:      {} km", format_km_value(snapshot.best_month_km));
    let pr = snapshot
        .pr_5k_sec
        .map_or_else(|| NO_DATA.to_owned(), |sec| format_duration(sec.round() as u32));
    println!("5K projection:   {pr}");
    println!(
        "Total:           {} runs, {}",
        snapshot.total_runs,
        format_distance(snapshot.total_distance_km)
    );

    println!("\nHEART RATE");
    let recovery = snapshot
        .recovery_bpm
        .map_or_else(|| NO_DATA.to_owned(), |bpm| format!("{bpm:.0} bpm"));
    println!("Reserve (30 days): {recovery}");
    println!(
        "Runs with HR:     {} of {} (30 days), {} of {} (all time)",
        snapshot.last_30_days.hr_samples.len(),
        snapshot.last_30_days.run_count,
        snapshot.all_time.hr_samples.len(),
        snapshot.all_time.run_count,
    );
    let zone = describe_heart_rate(snapshot.last_30_days.avg_hr, settings.max_hr());
    if !zone.is_empty() {
        println!("Last 30 days:     {zone}");
    }
    if let Some(share) = report.heart_rate {
        println!(
            "Share of max:     [{}] {} (tempo ceiling {})",
            gauge(share, report.heart_rate_marker),
            percent(share),
            percent(report.heart_rate_marker),
        );
    }

    println!("\nWEEKLY DISTANCE");
    let peak = snapshot
        .weekly_chart
        .iter()
        .map(|week| week.distance_km)
        .fold(0.0_f64, f64::max);
    for week in &snapshot.weekly_chart {
        let width = if peak > 0.0 {
            (week.distance_km / peak * CHART_WIDTH).round() as usize
        } else {
            0
        };
        println!(
            "{}  {:>6}  {}",
            week.week_start,
            format_km_value(week.distance_km),
            "#".repeat(width)
        );
    }
}

/// Display zone boundaries for a max heart rate
pub fn display_zones(max_hr: u32, boundaries: &BTreeMap<Zone, (u32, u32)>) {
    println!("Heart rate zones for max {max_hr} bpm");
    println!("{}", "-".repeat(44));
    for (zone, (lower, upper)) in boundaries {
        println!("{:<8} {:>3}–{:<3} bpm  {}", zone.label(), lower, upper, zone.intent());
    }
}

/// Display current settings
pub fn display_settings(settings: &Settings) {
    let km = |goal: Option<f64>| {
        goal.map_or_else(|| NO_DATA.to_owned(), |v| format!("{} km", format_km_value(v)))
    };
    println!("   Weekly goal:  {}", km(settings.weekly_goal()));
    println!("   Monthly goal: {}", km(settings.monthly_goal()));
    println!(
        "   Target pace:  {}",
        settings
            .target_pace()
            .map_or_else(|| NO_DATA.to_owned(), |sec| format!("{} min/km", format_goal_pace(sec)))
    );
    println!("   Max HR:       {}", optional_bpm(settings.max_hr()));
}

/// Display the outcome of an import
pub fn display_import_summary(summary: &ImportSummary) {
    println!(
        "Imported {} runs ({} new, {} updated). Total: {}.",
        summary.imported, summary.added, summary.updated, summary.total
    );
    if summary.rejected > 0 {
        println!("Skipped {} invalid entries.", summary.rejected);
    }
}
