// ABOUTME: Display formatting for paces, durations, distances, and hour totals
// ABOUTME: Missing or non-positive values render as the shared no-data placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use crate::constants::NO_DATA;

/// Format a pace as `MM:SS min/km`
///
/// `None`, non-finite and non-positive paces render as the placeholder so
/// "no data" is never confused with a real value.
#[must_use]
pub fn format_pace(sec_per_km: Option<f64>) -> String {
    let short = format_pace_short(sec_per_km);
    if short == NO_DATA {
        short
    } else {
        format!("{short} min/km")
    }
}

/// Format a pace as `MM:SS` without unit
#[must_use]
pub fn format_pace_short(sec_per_km: Option<f64>) -> String {
    let Some(pace) = sec_per_km.filter(|p| p.is_finite() && *p > 0.0) else {
        return NO_DATA.to_owned();
    };

    let mut minutes = (pace / 60.0).floor() as u64;
    let mut seconds = (pace % 60.0).round() as u64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as `MM:SS`, or `HH:MM:SS` from one hour on
#[must_use]
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Format a distance with two decimals and unit
#[must_use]
pub fn format_distance(distance_km: f64) -> String {
    format!("{distance_km:.2} km")
}

/// Format a kilometre total with one decimal, no unit
#[must_use]
pub fn format_km_value(value: f64) -> String {
    format!("{value:.1}")
}

/// Format an hour total: two decimals below 10 h, one decimal above
#[must_use]
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return "0.00".to_owned();
    }
    if hours >= 10.0 {
        format!("{hours:.1}")
    } else {
        format!("{hours:.2}")
    }
}

/// Format a goal pace in whole seconds as `MM:SS`
#[must_use]
pub fn format_goal_pace(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format an optional heart rate as `NNN bpm`
#[must_use]
pub fn format_heart_rate(bpm: Option<f64>) -> String {
    bpm.filter(|hr| hr.is_finite() && *hr > 0.0)
        .map_or_else(|| NO_DATA.to_owned(), |hr| format!("{} bpm", hr.round()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(Some(300.0)), "05:00 min/km");
        assert_eq!(format_pace(Some(359.6)), "06:00 min/km");
        assert_eq!(format_pace(None), NO_DATA);
        assert_eq!(format_pace(Some(0.0)), NO_DATA);
        assert_eq!(format_pace_short(Some(f64::INFINITY)), NO_DATA);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1500), "25:00");
        assert_eq!(format_duration(3723), "01:02:03");
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_distance(5.0), "5.00 km");
        assert_eq!(format_km_value(12.54), "12.5");
        assert_eq!(format_hours(0.4166), "0.42");
        assert_eq!(format_hours(12.26), "12.3");
        assert_eq!(format_hours(-1.0), "0.00");
        assert_eq!(format_goal_pace(330), "05:30");
        assert_eq!(format_heart_rate(Some(149.6)), "150 bpm");
        assert_eq!(format_heart_rate(None), NO_DATA);
    }
}
