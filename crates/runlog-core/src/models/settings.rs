// ABOUTME: User settings with distance goals, target pace, and maximum heart rate
// ABOUTME: Zero goal values mean "no goal set" and are exposed as None through accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use crate::constants::defaults;
use crate::intelligence::algorithms::default_max_hr;
use serde::{Deserialize, Serialize};

/// User-configured targets
///
/// The heart rate zone table is intentionally absent: zones are always
/// derived from the fixed percentage table and `max_hr_user` at the moment
/// of use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Weekly distance goal in km, 0 when unset
    pub weekly_goal_km: f64,
    /// Monthly distance goal in km, 0 when unset
    pub monthly_goal_km: f64,
    /// Target pace in seconds per km, 0 when unset
    pub target_pace_sec_per_km: u32,
    /// User's maximum heart rate
    pub max_hr_user: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weekly_goal_km: defaults::WEEKLY_GOAL_KM,
            monthly_goal_km: defaults::MONTHLY_GOAL_KM,
            target_pace_sec_per_km: defaults::TARGET_PACE_SEC_PER_KM,
            max_hr_user: Some(default_max_hr()),
        }
    }
}

impl Settings {
    /// Settings with every goal cleared and no max heart rate
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            weekly_goal_km: 0.0,
            monthly_goal_km: 0.0,
            target_pace_sec_per_km: 0,
            max_hr_user: None,
        }
    }

    /// Weekly goal, if one is set
    #[must_use]
    pub fn weekly_goal(&self) -> Option<f64> {
        positive(self.weekly_goal_km)
    }

    /// Monthly goal, if one is set
    #[must_use]
    pub fn monthly_goal(&self) -> Option<f64> {
        positive(self.monthly_goal_km)
    }

    /// Target pace, if one is set
    #[must_use]
    pub const fn target_pace(&self) -> Option<u32> {
        match self.target_pace_sec_per_km {
            0 => None,
            pace => Some(pace),
        }
    }

    /// Max heart rate, if set to a positive value
    #[must_use]
    pub fn max_hr(&self) -> Option<u32> {
        self.max_hr_user.filter(|hr| *hr > 0)
    }
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}
