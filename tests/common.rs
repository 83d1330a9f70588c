// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, fixed dates, run fixtures and entry forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `runlog`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use chrono::NaiveDate;
use runlog::store::validation::RunForm;
use runlog_core::models::{Run, RunId};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Reference day used by scenario tests: Wednesday 2024-01-10
pub fn reference_day() -> NaiveDate {
    day(2024, 1, 10)
}

/// Run without heart rate
pub fn run(id: &str, date: NaiveDate, distance_km: f64, duration_sec: u32) -> Run {
    Run::new(RunId::from(id), date, distance_km, duration_sec)
}

/// Run with average and optional max heart rate
pub fn run_with_hr(
    id: &str,
    date: NaiveDate,
    distance_km: f64,
    duration_sec: u32,
    avg_hr: u32,
    max_hr: Option<u32>,
) -> Run {
    run(id, date, distance_km, duration_sec).with_heart_rate(Some(avg_hr), max_hr)
}

/// Valid entry form for a 10 km run in 50 minutes
pub fn valid_form() -> RunForm {
    RunForm {
        date: "2024-01-10".into(),
        distance: "10".into(),
        time: "50:00".into(),
        avg_hr: "150".into(),
        max_hr: Some("170".into()),
        notes: "easy".into(),
    }
}
