// ABOUTME: Core data models for the running log
// ABOUTME: Re-exports Run, RunId, and Settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

//! # Data Models
//!
//! - `Run`: one completed run with distance, duration, derived pace and
//!   optional heart rate data
//! - `RunId`: opaque identifier, preserved across import/export
//! - `Settings`: user goals and max heart rate
//!
//! `Run` is serialize-only. Every path that turns external data into runs goes
//! through the store's sanitizer so the derived pace is never taken on trust.

mod run;
mod settings;

pub use run::{derive_pace, round_distance, Run, RunId};
pub use settings::Settings;
