// ABOUTME: Settings commands for the runlog CLI
// ABOUTME: Handles show, set and reset of goals and max heart rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use runlog::store::validation::SettingsForm;
use runlog::RunLog;
use runlog_core::errors::AppResult;

use crate::helpers::display::display_settings;

type Result<T> = AppResult<T>;

/// Settings values given on the command line
pub struct SettingsChanges {
    pub weekly_goal: Option<String>,
    pub monthly_goal: Option<String>,
    pub target_pace: Option<String>,
    pub max_hr: Option<String>,
}

/// Print current settings
pub fn show(log: &RunLog) -> bool {
    display_settings(log.settings());
    false
}

/// Validate and save changed settings
pub fn set(log: &mut RunLog, changes: SettingsChanges) -> Result<bool> {
    let mut form = SettingsForm::from(log.settings());
    if let Some(weekly_goal) = changes.weekly_goal {
        form.weekly_goal = weekly_goal;
    }
    if let Some(monthly_goal) = changes.monthly_goal {
        form.monthly_goal = monthly_goal;
    }
    if let Some(target_pace) = changes.target_pace {
        form.target_pace = target_pace;
    }
    if let Some(max_hr) = changes.max_hr {
        form.max_hr = max_hr;
    }

    let settings = log.save_settings(&form)?;
    println!("Settings saved.");
    display_settings(settings);
    Ok(true)
}

/// Restore default settings
pub fn reset(log: &mut RunLog) -> bool {
    let settings = log.reset_settings();
    println!("Settings reset to defaults.");
    display_settings(settings);
    true
}
