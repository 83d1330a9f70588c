// ABOUTME: Statistics commands for the runlog CLI
// ABOUTME: Prints the dashboard and heart rate zone tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use runlog::RunLog;
use runlog_core::errors::AppResult;
use runlog_intelligence::goals::goal_progress;
use tracing::debug;

use crate::helpers::display::{display_dashboard, display_zones};

type Result<T> = AppResult<T>;

/// Print the dashboard, or the raw snapshot as JSON
pub fn dashboard(log: &RunLog, json: bool) -> Result<bool> {
    let snapshot = log.stats();
    debug!(reference_day = %snapshot.reference_day, "Rendering dashboard");

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let report = goal_progress(&snapshot, log.settings());
        display_dashboard(&snapshot, &report, log.settings(), log.latest());
    }
    Ok(false)
}

/// Print zone boundaries for a candidate or the saved max heart rate
pub fn zones(log: &RunLog, candidate_max_hr: Option<u32>) -> bool {
    let max_hr = candidate_max_hr.or_else(|| log.settings().max_hr());
    match (max_hr, log.zone_preview(candidate_max_hr)) {
        (Some(max_hr), Some(boundaries)) => display_zones(max_hr, &boundaries),
        _ => println!("Set your maximum heart rate to see zone information."),
    }
    false
}
