// ABOUTME: Statistics engine, heart rate zone calculator, and goal progress for runlog
// ABOUTME: Pure functions: runs and settings in, derived metrics out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

#![deny(unsafe_code)]

//! # Runlog Intelligence
//!
//! Turns an unordered collection of runs into time-windowed metrics.
//! Nothing in this crate performs I/O or holds state; the only ambient input
//! is the local calendar day used by [`stats::compute_stats`].
//!
//! Dependency order inside the crate: `zones` and `calendar` are leaves,
//! `stats` builds on both, and `goals` reads a finished snapshot.

/// Monday-anchored weeks, calendar months, and inclusive date windows
pub mod calendar;

/// Goal-relative progress derived from a stats snapshot
pub mod goals;

/// Windowed aggregates, best week/month, and personal records
pub mod stats;

/// Five-band heart rate training zones
pub mod zones;

pub use goals::{goal_progress, GoalProgressReport};
pub use stats::{compute_stats, compute_stats_at, StatsSnapshot, WindowSummary};
pub use zones::{classify, zone_boundaries_bpm, zone_fractions, Zone, ZoneClassification};
