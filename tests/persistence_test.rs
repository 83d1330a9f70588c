// ABOUTME: Integration tests for the in-memory and JSON file state repositories
// ABOUTME: Covers round trips, missing files, legacy blobs and tolerant decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{day, init_test_logging, run, run_with_hr, valid_form};
use runlog::persistence::{JsonFileRepository, MemoryRepository, StateRepository};
use runlog::RunLog;
use runlog_core::models::Settings;
use serde_json::Value;

#[tokio::test]
async fn test_file_repository_round_trip() -> Result<()> {
    init_test_logging();
    let temp_dir = tempfile::tempdir()?;
    let repository = JsonFileRepository::new(temp_dir.path().join("data"));

    let mut log = RunLog::load(&repository, Settings::default()).await?;
    assert!(log.runs().is_empty());
    log.submit(&valid_form())?;
    log.persist(&repository).await?;

    assert!(repository.runs_path().exists());
    assert!(repository.settings_path().exists());

    let reloaded = RunLog::load(&repository, Settings::default()).await?;
    assert_eq!(reloaded.runs(), log.runs());
    assert_eq!(reloaded.settings(), log.settings());
    Ok(())
}

#[tokio::test]
async fn test_missing_files_load_defaults() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let repository = JsonFileRepository::new(temp_dir.path());
    let defaults = Settings {
        max_hr_user: Some(179),
        ..Settings::default()
    };

    assert!(repository.load_runs().await?.is_empty());
    assert_eq!(repository.load_settings(&defaults).await?, defaults);
    Ok(())
}

#[tokio::test]
async fn test_corrupt_run_file_loads_empty() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let repository = JsonFileRepository::new(temp_dir.path());
    std::fs::write(repository.runs_path(), "{ definitely not a list")?;

    assert!(repository.load_runs().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_stored_runs_are_sanitized_and_sorted() -> Result<()> {
    let repository = MemoryRepository::with_blobs(
        Some(
            r#"[
                {"id": "a", "date": "2024-01-01", "distance": 5, "time": 1500, "paceSecPerKm": 1},
                {"id": "b", "date": "2024-01-05", "distanceKm": 10, "durationSec": 3000},
                {"id": "c", "date": "2024-01-03", "distanceKm": -1, "durationSec": 3000}
            ]"#
            .to_owned(),
        ),
        None,
    );

    let runs = repository.load_runs().await?;
    let ids: Vec<&str> = runs.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(runs[1].pace_sec_per_km(), 300);
    Ok(())
}

#[tokio::test]
async fn test_legacy_settings_blob() -> Result<()> {
    let repository = MemoryRepository::with_blobs(
        None,
        Some(r#"{"weeklyKm": 40, "monthlyGoalKm": "bad", "paceSeconds": 300, "maxHrUser": 0}"#.to_owned()),
    );
    let defaults = Settings::default();

    let settings = repository.load_settings(&defaults).await?;

    assert!((settings.weekly_goal_km - 40.0).abs() < f64::EPSILON);
    assert!((settings.monthly_goal_km - defaults.monthly_goal_km).abs() < f64::EPSILON);
    assert_eq!(settings.target_pace_sec_per_km, 300);
    assert_eq!(settings.max_hr_user, None);
    Ok(())
}

#[tokio::test]
async fn test_saved_settings_carry_zone_table() -> Result<()> {
    let repository = MemoryRepository::new();
    repository.save_settings(&Settings::default()).await?;

    let blob: Value = serde_json::from_str(&repository.settings_blob().await.unwrap())?;
    assert_eq!(blob["maxHrUser"], 186);
    assert_eq!(blob["zones"]["z1"], serde_json::json!([0.5, 0.6]));
    assert_eq!(blob["zones"]["z5"], serde_json::json!([0.9, 1.0]));

    let reloaded = repository.load_settings(&Settings::unset()).await?;
    assert_eq!(reloaded, Settings::default());
    Ok(())
}

#[tokio::test]
async fn test_memory_repository_shares_state_between_clones() -> Result<()> {
    let repository = MemoryRepository::new();
    let writer = repository.clone();
    writer
        .save_runs(&[
            run("a", day(2024, 1, 1), 5.0, 1500),
            run_with_hr("b", day(2024, 1, 2), 8.0, 2400, 150, Some(170)),
        ])
        .await?;

    let runs = repository.load_runs().await?;
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].id().as_str(), "b");
    assert_eq!(runs[0].max_hr(), Some(170));
    Ok(())
}
