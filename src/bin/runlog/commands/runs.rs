// ABOUTME: Run management commands for the runlog CLI
// ABOUTME: Handles add, edit, delete, clear and list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use chrono::Local;
use runlog::store::validation::RunForm;
use runlog::RunLog;
use runlog_core::errors::AppResult;
use runlog_core::models::RunId;
use tracing::{info, warn};

use crate::helpers::display::{display_run_table, display_submit_outcome};

type Result<T> = AppResult<T>;

/// Field values given on the command line; `None` means "not given"
pub struct RunChanges {
    pub date: Option<String>,
    pub distance: Option<String>,
    pub time: Option<String>,
    pub avg_hr: Option<String>,
    pub max_hr: Option<String>,
    pub notes: Option<String>,
}

impl RunChanges {
    fn apply(self, form: &mut RunForm) {
        if let Some(date) = self.date {
            form.date = date;
        }
        if let Some(distance) = self.distance {
            form.distance = distance;
        }
        if let Some(time) = self.time {
            form.time = time;
        }
        if let Some(avg_hr) = self.avg_hr {
            form.avg_hr = avg_hr;
        }
        if let Some(max_hr) = self.max_hr {
            form.max_hr = Some(max_hr);
        }
        if let Some(notes) = self.notes {
            form.notes = notes;
        }
    }
}

/// Log a new run
pub fn add(log: &mut RunLog, changes: RunChanges) -> Result<bool> {
    let mut form = RunForm {
        date: Local::now().date_naive().to_string(),
        ..RunForm::default()
    };
    changes.apply(&mut form);

    let outcome = log.submit(&form)?;
    display_submit_outcome("Run saved", &outcome);
    Ok(true)
}

/// Edit an existing run; fields not given keep their stored value
pub fn edit(log: &mut RunLog, id: &str, changes: RunChanges) -> Result<bool> {
    let id = RunId::from(id);
    let mut form = log
        .get(&id)
        .map(RunForm::from)
        .unwrap_or_default();
    changes.apply(&mut form);

    let outcome = log.update(&id, &form)?;
    display_submit_outcome("Run updated", &outcome);
    Ok(true)
}

/// Delete one run
pub fn delete(log: &mut RunLog, id: &str) -> Result<bool> {
    let removed = log.delete(&RunId::from(id))?;
    println!("Deleted run {} from {}.", removed.id(), removed.date());
    Ok(true)
}

/// Delete every run after explicit confirmation
pub fn clear(log: &mut RunLog, confirmed: bool) -> bool {
    if !confirmed {
        warn!("Clear requested without confirmation");
        println!("This deletes all {} runs. Re-run with --yes to confirm.", log.runs().len());
        return false;
    }
    let removed = log.clear();
    info!(removed, "Cleared run log from CLI");
    println!("Deleted {removed} runs.");
    true
}

/// List runs, newest first
pub fn list(log: &RunLog, limit: Option<usize>) -> bool {
    let runs = log.runs();
    let shown = limit.map_or(runs, |n| &runs[..n.min(runs.len())]);
    display_run_table(shown, log.settings());
    false
}
