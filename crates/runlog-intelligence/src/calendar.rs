// ABOUTME: Calendar helpers for Monday-anchored weeks, year/month keys, and date windows
// ABOUTME: All windows are inclusive of both endpoints and anchored to a reference day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// Monday of the week containing `date`
///
/// Sunday belongs to the week that started six days earlier.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(days_from_monday)
}

/// Whether two dates fall in the same Monday-anchored week
#[must_use]
pub fn is_same_week(a: NaiveDate, b: NaiveDate) -> bool {
    week_start(a) == week_start(b)
}

/// Whether two dates share calendar year and month
#[must_use]
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    YearMonth::of(a) == YearMonth::of(b)
}

/// Calendar month key, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    /// Calendar year
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
}

impl YearMonth {
    /// Month containing `date`
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Inclusive date range; a missing bound is unbounded on that side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    /// First day included
    pub start: Option<NaiveDate>,
    /// Last day included
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    /// `[today - offset_days, today]`
    #[must_use]
    pub fn ending_at(today: NaiveDate, offset_days: i64) -> Self {
        Self {
            start: Some(today - Duration::days(offset_days)),
            end: Some(today),
        }
    }

    /// No bounds at all
    #[must_use]
    pub const fn all_time() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Inclusive membership test
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-01-01 is a Monday
        assert_eq!(week_start(d(2024, 1, 1)), d(2024, 1, 1));
        assert_eq!(week_start(d(2024, 1, 3)), d(2024, 1, 1));
        // Sunday goes back six days
        assert_eq!(week_start(d(2024, 1, 7)), d(2024, 1, 1));
        assert_eq!(week_start(d(2024, 1, 8)), d(2024, 1, 8));
    }

    #[test]
    fn test_week_crosses_year_boundary() {
        // 2023-12-31 is a Sunday, its week starts 2023-12-25
        assert_eq!(week_start(d(2023, 12, 31)), d(2023, 12, 25));
        assert!(is_same_week(d(2024, 12, 30), d(2025, 1, 5)));
        assert!(!is_same_week(d(2024, 1, 7), d(2024, 1, 8)));
    }

    #[test]
    fn test_year_month() {
        assert!(is_same_month(d(2024, 2, 1), d(2024, 2, 29)));
        assert!(!is_same_month(d(2024, 2, 1), d(2023, 2, 1)));
        assert_eq!(YearMonth::of(d(2024, 3, 9)).to_string(), "2024-03");
        assert!(YearMonth::of(d(2023, 12, 1)) < YearMonth::of(d(2024, 1, 1)));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let today = d(2024, 3, 30);
        let window = DateWindow::ending_at(today, 29);
        assert!(window.contains(d(2024, 3, 1)));
        assert!(window.contains(today));
        assert!(!window.contains(d(2024, 2, 29)));
        assert!(!window.contains(d(2024, 3, 31)));
        assert!(DateWindow::all_time().contains(d(1999, 1, 1)));
    }
}
