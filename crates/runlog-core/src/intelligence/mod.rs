// ABOUTME: Intelligence types shared between the core models and the stats engine
// ABOUTME: Hosts the max heart rate estimate used for default settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

/// Physiological estimation algorithms
pub mod algorithms;
