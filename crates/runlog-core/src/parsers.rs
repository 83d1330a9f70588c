// ABOUTME: Parsing of loosely formatted entry-form input into typed values
// ABOUTME: Handles decimal commas, mm:ss / hh:mm:ss times, bounded heart rates, and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

//! Entry-form parsers.
//!
//! These only turn text into numbers. Range policy that spans several fields
//! (duration limits, max-vs-average heart rate) lives in the run store's
//! validation module.

/// Outcome of parsing an optional, bounded heart rate field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartRateInput {
    /// Field left empty
    Missing,
    /// Field present but not a number inside the bounds
    Invalid,
    /// Parsed and rounded heart rate
    Valid(u32),
}

impl HeartRateInput {
    /// The parsed value, if valid
    #[must_use]
    pub const fn value(self) -> Option<u32> {
        match self {
            Self::Valid(hr) => Some(hr),
            Self::Missing | Self::Invalid => None,
        }
    }
}

fn normalise_decimal(value: &str) -> String {
    value.trim().replacen(',', ".", 1)
}

/// Parse a distance in km, accepting a decimal comma (`"5,25"`)
#[must_use]
pub fn parse_distance(value: &str) -> Option<f64> {
    let normalised = normalise_decimal(value);
    if normalised.is_empty() {
        return None;
    }
    normalised.parse::<f64>().ok().filter(|d| d.is_finite())
}

/// Parse `mm:ss` or `hh:mm:ss` into seconds
///
/// Minutes and seconds must both be below 60.
#[must_use]
pub fn parse_time(value: &str) -> Option<u32> {
    let parts: Vec<&str> = value.trim().split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let numbers = parts
        .iter()
        .map(|part| part.trim().parse::<u32>().ok())
        .collect::<Option<Vec<u32>>>()?;

    let (hours, minutes, seconds) = match numbers.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => (0, *m, *s),
        _ => return None,
    };

    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)
}

/// Parse a heart rate and check it lies within `[lower, upper]`
#[must_use]
pub fn parse_heart_rate(value: Option<&str>, lower: u32, upper: u32) -> HeartRateInput {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return HeartRateInput::Missing;
    };

    match trimmed.parse::<f64>() {
        Ok(parsed)
            if parsed.is_finite()
                && parsed >= f64::from(lower)
                && parsed <= f64::from(upper) =>
        {
            HeartRateInput::Valid(parsed.round() as u32)
        }
        _ => HeartRateInput::Invalid,
    }
}

/// Parse a goal distance; an empty field means "no goal" (0)
///
/// Returns `None` for unparsable or negative input.
#[must_use]
pub fn parse_goal_distance(value: &str) -> Option<f64> {
    let normalised = normalise_decimal(value);
    if normalised.is_empty() {
        return Some(0.0);
    }
    normalised
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
}

/// Parse a goal pace in `mm:ss`; an empty field means "no target" (0)
#[must_use]
pub fn parse_goal_pace(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0);
    }

    let (minutes, seconds) = trimmed.split_once(':')?;
    let minutes = minutes.trim().parse::<u32>().ok()?;
    let seconds = seconds.trim().parse::<u32>().ok()?;
    if seconds >= 60 {
        return None;
    }
    minutes.checked_mul(60)?.checked_add(seconds)
}
