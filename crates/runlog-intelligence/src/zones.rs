// ABOUTME: Heart rate training zones as five contiguous fractions of maximum heart rate
// ABOUTME: Provides the fixed fraction table, bpm boundaries, and boundary-safe classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

//! Heart rate zone calculator.
//!
//! The table is fixed; only the max heart rate is personal. Zones are
//! recomputed on every use and never read back from persisted settings.

use runlog_core::constants::zones::{BOUNDARY_TOLERANCE, Z1, Z2, Z3, Z4, Z5};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Training zone, ordered from easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// 50-60% of max heart rate
    Z1,
    /// 60-70% of max heart rate
    Z2,
    /// 70-80% of max heart rate
    Z3,
    /// 80-90% of max heart rate
    Z4,
    /// 90-100% of max heart rate
    Z5,
}

impl Zone {
    /// All zones in ascending order
    pub const ALL: [Self; 5] = [Self::Z1, Self::Z2, Self::Z3, Self::Z4, Self::Z5];

    /// Table key (`"z1"` .. `"z5"`)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Z1 => "z1",
            Self::Z2 => "z2",
            Self::Z3 => "z3",
            Self::Z4 => "z4",
            Self::Z5 => "z5",
        }
    }

    /// Display label (`"Zone Z1"`)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Z1 => "Zone Z1",
            Self::Z2 => "Zone Z2",
            Self::Z3 => "Zone Z3",
            Self::Z4 => "Zone Z4",
            Self::Z5 => "Zone Z5",
        }
    }

    /// Training intent of the zone
    #[must_use]
    pub const fn intent(self) -> &'static str {
        match self {
            Self::Z1 => "Recovery",
            Self::Z2 => "Endurance",
            Self::Z3 => "Tempo",
            Self::Z4 => "Threshold",
            Self::Z5 => "VO2 max",
        }
    }

    /// `(lower, upper)` fraction of max heart rate
    #[must_use]
    pub const fn fractions(self) -> (f64, f64) {
        match self {
            Self::Z1 => Z1,
            Self::Z2 => Z2,
            Self::Z3 => Z3,
            Self::Z4 => Z4,
            Self::Z5 => Z5,
        }
    }

    /// `(lower, upper)` bpm for the given max heart rate, rounded to nearest
    #[must_use]
    pub fn bpm_range(self, max_hr: f64) -> (u32, u32) {
        let (lower, upper) = self.fractions();
        ((lower * max_hr).round() as u32, (upper * max_hr).round() as u32)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The fixed fraction table, independent of any personal data
#[must_use]
pub fn zone_fractions() -> BTreeMap<Zone, (f64, f64)> {
    Zone::ALL
        .iter()
        .map(|zone| (*zone, zone.fractions()))
        .collect()
}

/// Zone boundaries in bpm for a max heart rate
///
/// Returns `None` unless `max_hr` is finite and positive.
#[must_use]
pub fn zone_boundaries_bpm(max_hr: f64) -> Option<BTreeMap<Zone, (u32, u32)>> {
    if !max_hr.is_finite() || max_hr <= 0.0 {
        return None;
    }
    Some(
        Zone::ALL
            .iter()
            .map(|zone| (*zone, zone.bpm_range(max_hr)))
            .collect(),
    )
}

/// Result of classifying a heart rate against a max heart rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneClassification {
    /// Matched zone
    pub zone: Zone,
    /// `avg_hr / max_hr`
    pub ratio: f64,
    /// Zone lower bound in bpm
    pub lower_bpm: u32,
    /// Zone upper bound in bpm
    pub upper_bpm: u32,
}

impl fmt::Display for ZoneClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} · {}–{} bpm",
            self.zone.label(),
            self.lower_bpm,
            self.upper_bpm
        )
    }
}

/// Zone for a ratio of max heart rate
///
/// Bands are half-open `[lower, upper)`; the tolerance lifts a ratio sitting
/// a hair below a boundary into the upper band, so 0.70 is always Z3.
/// A ratio matching no band, above or below the table, falls back to Z5.
#[must_use]
pub fn zone_for_ratio(ratio: f64) -> Zone {
    Zone::ALL
        .iter()
        .rev()
        .copied()
        .find(|zone| ratio + BOUNDARY_TOLERANCE >= zone.fractions().0)
        .unwrap_or(Zone::Z5)
}

/// Classify an average heart rate
///
/// Returns `None` when `max_hr` is not positive: without it a zone cannot be
/// computed and the caller should ask the user to configure it.
#[must_use]
pub fn classify(avg_hr: f64, max_hr: f64) -> Option<ZoneClassification> {
    if !max_hr.is_finite() || max_hr <= 0.0 || !avg_hr.is_finite() {
        return None;
    }

    let ratio = avg_hr / max_hr;
    let zone = zone_for_ratio(ratio);
    let (lower_bpm, upper_bpm) = zone.bpm_range(max_hr);
    Some(ZoneClassification {
        zone,
        ratio,
        lower_bpm,
        upper_bpm,
    })
}

/// Helper text for an average heart rate
///
/// Falls back to a configuration prompt when no max heart rate is set.
#[must_use]
pub fn describe_heart_rate(avg_hr: Option<f64>, max_hr: Option<u32>) -> String {
    let Some(avg) = avg_hr.filter(|hr| hr.is_finite() && *hr > 0.0) else {
        return String::new();
    };
    let Some(max) = max_hr.filter(|hr| *hr > 0) else {
        return "Tip: set your maximum heart rate to see zone information.".to_owned();
    };
    classify(avg, f64::from(max))
        .map_or_else(|| format!("Measured: {} bpm", avg.round()), |c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_table_is_contiguous() {
        let table = zone_fractions();
        assert_eq!(table.len(), 5);
        for pair in Zone::ALL.windows(2) {
            assert!((table[&pair[0]].1 - table[&pair[1]].0).abs() < f64::EPSILON);
        }
        assert!((table[&Zone::Z1].0 - 0.5).abs() < f64::EPSILON);
        assert!((table[&Zone::Z5].1 - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundaries_bpm() {
        let bounds = zone_boundaries_bpm(186.0).unwrap();
        assert_eq!(bounds[&Zone::Z1], (93, 112));
        assert_eq!(bounds[&Zone::Z3], (130, 149));
        assert_eq!(bounds[&Zone::Z5], (167, 186));
        assert!(zone_boundaries_bpm(0.0).is_none());
        assert!(zone_boundaries_bpm(-5.0).is_none());
        assert!(zone_boundaries_bpm(f64::NAN).is_none());
    }

    #[test]
    fn test_exact_boundaries_go_to_upper_zone() {
        assert_eq!(zone_for_ratio(0.70), Zone::Z3);
        assert_eq!(zone_for_ratio(0.60), Zone::Z2);
        assert_eq!(zone_for_ratio(0.80), Zone::Z4);
        assert_eq!(zone_for_ratio(0.90), Zone::Z5);
        assert_eq!(zone_for_ratio(0.7 - 1e-12), Zone::Z3);
        assert_eq!(zone_for_ratio(0.6999), Zone::Z2);
    }

    #[test]
    fn test_out_of_table_ratios() {
        assert_eq!(zone_for_ratio(1.2), Zone::Z5);
        assert_eq!(zone_for_ratio(0.3), Zone::Z5);
        assert_eq!(zone_for_ratio(0.0), Zone::Z5);
    }

    #[test]
    fn test_heart_rate_below_table_reports_top_zone() {
        let classification = classify(80.0, 190.0).unwrap();
        assert_eq!(classification.zone, Zone::Z5);
        assert_eq!((classification.lower_bpm, classification.upper_bpm), (171, 190));
        assert_eq!(
            describe_heart_rate(Some(80.0), Some(190)),
            "Zone Z5 · 171–190 bpm"
        );
    }

    #[test]
    fn test_classification_is_total_over_range() {
        let max_hr = 190.0;
        let mut previous = Zone::Z1;
        let mut hr = 0.5 * max_hr;
        while hr <= max_hr {
            let classification = classify(hr, max_hr).unwrap();
            assert!(classification.zone >= previous, "zones must never go down");
            previous = classification.zone;
            hr += 0.25;
        }
        assert_eq!(previous, Zone::Z5);
    }

    #[test]
    fn test_classify_scenario() {
        let classification = classify(150.0, 170.0).unwrap();
        assert_eq!(classification.zone, Zone::Z4);
        assert_eq!((classification.lower_bpm, classification.upper_bpm), (136, 153));
        assert_eq!(classification.to_string(), "Zone Z4 · 136–153 bpm");
    }

    #[test]
    fn test_classify_requires_max_hr() {
        assert!(classify(150.0, 0.0).is_none());
        assert!(describe_heart_rate(Some(150.0), None).starts_with("Tip"));
        assert!(describe_heart_rate(None, Some(186)).is_empty());
    }
}
