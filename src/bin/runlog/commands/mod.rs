// ABOUTME: Re-exports command modules for the runlog CLI
// ABOUTME: Provides run, stats, settings and import/export commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

pub mod runs;
pub mod settings;
pub mod stats;
pub mod transfer;
