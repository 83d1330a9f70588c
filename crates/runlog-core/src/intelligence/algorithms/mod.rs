// ABOUTME: Intelligence algorithm types re-exported from runlog-core
// ABOUTME: Contains the age-predicted max heart rate estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

/// Maximum heart rate estimation
pub mod maxhr;

pub use maxhr::{default_max_hr, estimate_max_hr};
