// ABOUTME: Import and export commands for the runlog CLI
// ABOUTME: Reads JSON backups and writes JSON or CSV exports to disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use chrono::Local;
use runlog::transfer::{export_csv, export_file_name, export_json, ExportFormat};
use runlog::RunLog;
use runlog_core::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::helpers::display::display_import_summary;

type Result<T> = AppResult<T>;

/// Merge a JSON backup into the log
pub async fn import(log: &mut RunLog, path: &Path) -> Result<bool> {
    let text = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("failed to read {}", path.display())).with_source(e)
    })?;

    let summary = log.import_json(&text)?;
    display_import_summary(&summary);
    Ok(true)
}

/// Write all runs to a JSON or CSV file
pub async fn export(log: &RunLog, format: ExportFormat, output: Option<PathBuf>) -> Result<bool> {
    let contents = match format {
        ExportFormat::Json => export_json(log.runs())?,
        ExportFormat::Csv => export_csv(log.runs())?,
    };
    let path = output.unwrap_or_else(|| {
        PathBuf::from(export_file_name(format, Local::now().date_naive()))
    });

    fs::write(&path, contents).await.map_err(|e| {
        AppError::storage(format!("failed to write {}", path.display())).with_source(e)
    })?;

    info!(%format, path = %path.display(), runs = log.runs().len(), "Exported runs");
    println!("Exported {} runs to {}.", log.runs().len(), path.display());
    Ok(false)
}
