// ABOUTME: Unit tests for environment configuration and logging configuration
// ABOUTME: Validates defaults, overrides and rejection of invalid ages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runlog::config::{default_data_dir, RunlogConfig, ASSUMED_AGE_ENV, DATA_DIR_ENV};
use runlog::logging::{LogFormat, LoggingConfig};
use runlog_core::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    env::remove_var(DATA_DIR_ENV);
    env::remove_var(ASSUMED_AGE_ENV);
    env::remove_var("LOG_FORMAT");
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = RunlogConfig::from_env().unwrap();

    assert_eq!(config.data_dir, default_data_dir());
    assert_eq!(config.assumed_age, 30);
    assert_eq!(config.default_settings().unwrap().max_hr_user, Some(186));
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(DATA_DIR_ENV, "/tmp/runlog-test-data");
    env::set_var(ASSUMED_AGE_ENV, "40");

    let config = RunlogConfig::from_env().unwrap();

    assert_eq!(config.data_dir, PathBuf::from("/tmp/runlog-test-data"));
    assert_eq!(config.assumed_age, 40);
    let settings = config.default_settings().unwrap();
    assert_eq!(settings.max_hr_user, Some(179));
    assert!((settings.weekly_goal_km - 30.0).abs() < f64::EPSILON);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_age_is_a_config_error() {
    clear_env();
    for raw in ["abc", "0", "150"] {
        env::set_var(ASSUMED_AGE_ENV, raw);
        let err = RunlogConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(err.message.contains(raw));
    }
    clear_env();
}

#[test]
#[serial]
fn test_cli_data_dir_wins() {
    clear_env();
    env::set_var(DATA_DIR_ENV, "/tmp/from-env");

    let config = RunlogConfig::from_env()
        .unwrap()
        .with_data_dir("/tmp/from-flag");

    assert_eq!(config.data_dir, PathBuf::from("/tmp/from-flag"));
    clear_env();
}

#[test]
#[serial]
fn test_log_format_from_environment() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Json);

    env::set_var("LOG_FORMAT", "something-else");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);
    clear_env();
}
