// ABOUTME: Entry-form validation for new or edited runs and for the settings form
// ABOUTME: Collects every field error in one pass, then applies sequential structural checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

//! Entry-form validation.
//!
//! Validation runs in three stages:
//!
//! 1. A presence pass that parses every field and reports all failures
//!    together as [`SubmissionError::InvalidFields`].
//! 2. A pace check. A pace outside the plausible range yields an
//!    [`Advisory`] on the result but never blocks submission.
//! 3. Structural checks (duration range, distance range, max-vs-average
//!    heart rate) that each abort on their own.

use chrono::NaiveDate;
use runlog_core::constants::heart_rate::{
    MAX_AVG_HR, MAX_MAX_HR, MAX_USER_MAX_HR, MIN_AVG_HR, MIN_MAX_HR, MIN_USER_MAX_HR,
};
use runlog_core::constants::pace::{FASTEST_PLAUSIBLE_SEC_PER_KM, SLOWEST_PLAUSIBLE_SEC_PER_KM};
use runlog_core::constants::run_limits::{
    MAX_DISTANCE_KM, MAX_DURATION_SEC, MIN_DISTANCE_KM, MIN_DURATION_SEC,
};
use runlog_core::errors::{AppError, ErrorCode};
use runlog_core::formatters::{format_duration, format_goal_pace, format_pace_short};
use runlog_core::models::{round_distance, Run, RunId, Settings};
use runlog_core::parsers::{
    parse_distance, parse_goal_distance, parse_goal_pace, parse_heart_rate, parse_time,
    HeartRateInput,
};
use std::fmt;
use thiserror::Error;

/// Form field that failed the presence pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Run date
    Date,
    /// Run distance
    Distance,
    /// Run time
    Time,
    /// Average heart rate of the run
    AvgHr,
    /// Maximum heart rate of the run
    MaxHr,
    /// Weekly distance goal
    WeeklyGoal,
    /// Monthly distance goal
    MonthlyGoal,
    /// Target pace
    TargetPace,
    /// User's maximum heart rate
    UserMaxHr,
}

impl FormField {
    /// Human readable field name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Distance => "distance",
            Self::Time => "time",
            Self::AvgHr => "average heart rate",
            Self::MaxHr => "maximum heart rate",
            Self::WeeklyGoal => "weekly goal",
            Self::MonthlyGoal => "monthly goal",
            Self::TargetPace => "target pace",
            Self::UserMaxHr => "max heart rate",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Blocking submission failure; stored state stays untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// One or more fields are missing or malformed
    #[error("Check {}.", join_fields(.0))]
    InvalidFields(Vec<FormField>),
    /// A non-positive distance leaves pace undefined
    #[error("Could not compute pace. Check distance and time.")]
    PaceUncomputable,
    /// Duration outside one minute to 24 hours
    #[error("Time must be between 00:01:00 and 24:00:00.")]
    DurationOutOfRange,
    /// Distance outside the open range of 0 to 200 km
    #[error("Distance must be greater than 0 and less than 200 km.")]
    DistanceOutOfRange,
    /// Maximum heart rate below average heart rate
    #[error("Max heart rate must be equal to or higher than your average heart rate.")]
    MaxBelowAverage,
}

impl From<SubmissionError> for AppError {
    fn from(error: SubmissionError) -> Self {
        let code = match error {
            SubmissionError::InvalidFields(_) => ErrorCode::InvalidFormat,
            SubmissionError::PaceUncomputable => ErrorCode::InvalidInput,
            SubmissionError::DurationOutOfRange
            | SubmissionError::DistanceOutOfRange
            | SubmissionError::MaxBelowAverage => ErrorCode::ValueOutOfRange,
        };
        Self::new(code, error.to_string())
    }
}

/// Non-blocking warning attached to an accepted submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// Pace outside the plausible 2:45 to 15:00 min/km range
    UnrealisticPace {
        /// Computed pace in seconds per km
        pace_sec_per_km: f64,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrealisticPace { pace_sec_per_km } => write!(
                f,
                "Probably an unrealistic pace ({} min/km), check your input.",
                format_pace_short(Some(*pace_sec_per_km))
            ),
        }
    }
}

/// Raw run entry form, one string per input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunForm {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Kilometres, decimal point or comma
    pub distance: String,
    /// `mm:ss` or `hh:mm:ss`
    pub time: String,
    /// Required average heart rate
    pub avg_hr: String,
    /// Optional maximum heart rate
    pub max_hr: Option<String>,
    /// Free text
    pub notes: String,
}

impl From<&Run> for RunForm {
    fn from(run: &Run) -> Self {
        Self {
            date: run.date().to_string(),
            distance: format!("{:.2}", run.distance_km()),
            time: format_duration(run.duration_sec()),
            avg_hr: run.avg_hr().map(|hr| hr.to_string()).unwrap_or_default(),
            max_hr: run.max_hr().map(|hr| hr.to_string()),
            notes: run.notes().to_owned(),
        }
    }
}

/// Typed values of an accepted run form
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    /// Run date
    pub date: NaiveDate,
    /// Distance in km as entered
    pub distance_km: f64,
    /// Duration in seconds
    pub duration_sec: u32,
    /// Average heart rate
    pub avg_hr: u32,
    /// Maximum heart rate
    pub max_hr: Option<u32>,
    /// Notes
    pub notes: String,
}

/// Accepted run submission plus any advisories to show
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRun {
    /// Parsed values
    pub fields: ValidatedFields,
    /// Warnings that did not block submission
    pub advisories: Vec<Advisory>,
}

impl ValidatedRun {
    /// Build the run under the given identifier
    #[must_use]
    pub fn into_run(self, id: RunId) -> Run {
        let fields = self.fields;
        Run::new(id, fields.date, fields.distance_km, fields.duration_sec)
            .with_heart_rate(Some(fields.avg_hr), fields.max_hr)
            .with_notes(fields.notes)
    }
}

/// Validate a run entry form
///
/// # Errors
///
/// Returns a [`SubmissionError`] describing why the form cannot be saved.
pub fn validate_run_form(form: &RunForm) -> Result<ValidatedRun, SubmissionError> {
    let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d").ok();
    let distance = parse_distance(&form.distance);
    let duration = parse_time(&form.time);
    let avg_hr = parse_heart_rate(Some(&form.avg_hr), MIN_AVG_HR, MAX_AVG_HR).value();
    let max_hr = parse_heart_rate(form.max_hr.as_deref(), MIN_MAX_HR, MAX_MAX_HR);

    let mut invalid = Vec::new();
    if date.is_none() {
        invalid.push(FormField::Date);
    }
    if distance.is_none() {
        invalid.push(FormField::Distance);
    }
    if duration.is_none() {
        invalid.push(FormField::Time);
    }
    if avg_hr.is_none() {
        invalid.push(FormField::AvgHr);
    }
    if max_hr == HeartRateInput::Invalid {
        invalid.push(FormField::MaxHr);
    }

    let (Some(date), Some(distance_km), Some(duration_sec), Some(avg_hr)) =
        (date, distance, duration, avg_hr)
    else {
        return Err(SubmissionError::InvalidFields(invalid));
    };
    if !invalid.is_empty() {
        return Err(SubmissionError::InvalidFields(invalid));
    }
    let max_hr = max_hr.value();

    if distance_km <= 0.0 {
        return Err(SubmissionError::PaceUncomputable);
    }
    let pace = f64::from(duration_sec) / distance_km;

    let mut advisories = Vec::new();
    if !(FASTEST_PLAUSIBLE_SEC_PER_KM..=SLOWEST_PLAUSIBLE_SEC_PER_KM).contains(&pace) {
        advisories.push(Advisory::UnrealisticPace {
            pace_sec_per_km: pace,
        });
    }

    if !(MIN_DURATION_SEC..=MAX_DURATION_SEC).contains(&duration_sec) {
        return Err(SubmissionError::DurationOutOfRange);
    }
    let stored_km = round_distance(distance_km);
    if stored_km <= MIN_DISTANCE_KM || stored_km >= MAX_DISTANCE_KM {
        return Err(SubmissionError::DistanceOutOfRange);
    }
    if max_hr.is_some_and(|max| max < avg_hr) {
        return Err(SubmissionError::MaxBelowAverage);
    }

    Ok(ValidatedRun {
        fields: ValidatedFields {
            date,
            distance_km,
            duration_sec,
            avg_hr,
            max_hr,
            notes: form.notes.trim().to_owned(),
        },
        advisories,
    })
}

/// Raw settings form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    /// Weekly goal in km, empty for none
    pub weekly_goal: String,
    /// Monthly goal in km, empty for none
    pub monthly_goal: String,
    /// Target pace `mm:ss`, empty for none
    pub target_pace: String,
    /// Maximum heart rate, empty keeps the current value
    pub max_hr: String,
}

impl From<&Settings> for SettingsForm {
    fn from(settings: &Settings) -> Self {
        Self {
            weekly_goal: settings
                .weekly_goal()
                .map(|km| km.to_string())
                .unwrap_or_default(),
            monthly_goal: settings
                .monthly_goal()
                .map(|km| km.to_string())
                .unwrap_or_default(),
            target_pace: settings
                .target_pace()
                .map(format_goal_pace)
                .unwrap_or_default(),
            max_hr: settings
                .max_hr()
                .map(|hr| hr.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Validate the settings form against the current settings
///
/// # Errors
///
/// Returns [`SubmissionError::InvalidFields`] listing every malformed field.
pub fn validate_settings_form(
    form: &SettingsForm,
    current: &Settings,
) -> Result<Settings, SubmissionError> {
    let weekly = parse_goal_distance(&form.weekly_goal);
    let monthly = parse_goal_distance(&form.monthly_goal);
    let pace = parse_goal_pace(&form.target_pace);
    let max_hr = parse_heart_rate(Some(&form.max_hr), MIN_USER_MAX_HR, MAX_USER_MAX_HR);

    let mut invalid = Vec::new();
    if weekly.is_none() {
        invalid.push(FormField::WeeklyGoal);
    }
    if monthly.is_none() {
        invalid.push(FormField::MonthlyGoal);
    }
    if pace.is_none() {
        invalid.push(FormField::TargetPace);
    }
    if max_hr == HeartRateInput::Invalid {
        invalid.push(FormField::UserMaxHr);
    }

    match (weekly, monthly, pace) {
        (Some(weekly_goal_km), Some(monthly_goal_km), Some(target_pace_sec_per_km))
            if invalid.is_empty() =>
        {
            Ok(Settings {
                weekly_goal_km,
                monthly_goal_km,
                target_pace_sec_per_km,
                max_hr_user: max_hr.value().or(current.max_hr_user),
            })
        }
        _ => Err(SubmissionError::InvalidFields(invalid)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(distance: &str, time: &str, avg: &str, max: Option<&str>) -> RunForm {
        RunForm {
            date: "2024-01-01".to_owned(),
            distance: distance.to_owned(),
            time: time.to_owned(),
            avg_hr: avg.to_owned(),
            max_hr: max.map(str::to_owned),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_form_with_decimal_comma() {
        let validated = validate_run_form(&form("5,25", "26:15", "150", Some("170"))).unwrap();
        assert!((validated.fields.distance_km - 5.25).abs() < f64::EPSILON);
        assert_eq!(validated.fields.duration_sec, 1575);
        assert!(validated.advisories.is_empty());
        let run = validated.into_run(RunId::from("x"));
        assert_eq!(run.pace_sec_per_km(), 300);
    }

    #[test]
    fn test_all_invalid_fields_are_collected() {
        let mut bad = form("abc", "10:75", "", Some("300"));
        bad.date = String::new();
        let err = validate_run_form(&bad).unwrap_err();
        assert_eq!(
            err,
            SubmissionError::InvalidFields(vec![
                FormField::Date,
                FormField::Distance,
                FormField::Time,
                FormField::AvgHr,
                FormField::MaxHr,
            ])
        );
        assert!(err.to_string().starts_with("Check date, distance"));
    }

    #[test]
    fn test_sequential_checks() {
        assert_eq!(
            validate_run_form(&form("0", "25:00", "150", None)),
            Err(SubmissionError::PaceUncomputable)
        );
        assert_eq!(
            validate_run_form(&form("0,1", "00:30", "150", None)),
            Err(SubmissionError::DurationOutOfRange)
        );
        assert_eq!(
            validate_run_form(&form("250", "20:00:00", "150", None)),
            Err(SubmissionError::DistanceOutOfRange)
        );
        assert_eq!(
            validate_run_form(&form("5", "25:00", "150", Some("140"))),
            Err(SubmissionError::MaxBelowAverage)
        );
    }

    #[test]
    fn test_unrealistic_pace_is_advisory_only() {
        let validated = validate_run_form(&form("10", "15:00", "150", None)).unwrap();
        assert_eq!(validated.advisories.len(), 1);
        assert!(validated.advisories[0].to_string().contains("01:30"));
    }

    #[test]
    fn test_settings_form_keeps_current_max_hr_when_empty() {
        let current = Settings::default();
        let form = SettingsForm {
            weekly_goal: "40".to_owned(),
            monthly_goal: String::new(),
            target_pace: "5:00".to_owned(),
            max_hr: String::new(),
        };
        let saved = validate_settings_form(&form, &current).unwrap();
        assert_eq!(saved.weekly_goal(), Some(40.0));
        assert_eq!(saved.monthly_goal(), None);
        assert_eq!(saved.target_pace(), Some(300));
        assert_eq!(saved.max_hr_user, current.max_hr_user);
    }

    #[test]
    fn test_settings_form_rejects_out_of_range_max_hr() {
        let form = SettingsForm {
            max_hr: "99".to_owned(),
            target_pace: "abc".to_owned(),
            ..SettingsForm::default()
        };
        assert_eq!(
            validate_settings_form(&form, &Settings::default()),
            Err(SubmissionError::InvalidFields(vec![
                FormField::TargetPace,
                FormField::UserMaxHr
            ]))
        );
    }

    #[test]
    fn test_settings_round_trip_through_form() {
        let settings = Settings::default();
        let form = SettingsForm::from(&settings);
        assert_eq!(form.target_pace, "05:30");
        assert_eq!(validate_settings_form(&form, &Settings::unset()).unwrap(), settings);
    }
}
