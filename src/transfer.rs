// ABOUTME: JSON backup import and JSON/CSV export of the run collection
// ABOUTME: Import rejects non-list files and files without a single valid run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use crate::store::sanitize::sanitize_all;
use chrono::NaiveDate;
use runlog_core::errors::{AppError, AppResult, ErrorCode};
use runlog_core::models::Run;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

/// CSV header row, in column order
pub const CSV_HEADER: [&str; 6] = [
    "date",
    "distanceKm",
    "durationSec",
    "paceSecPerKm",
    "avgHr",
    "maxHr",
];

/// Structural import failure; nothing is merged when this is returned
#[derive(Debug, Error)]
pub enum ImportError {
    /// Not valid JSON
    #[error("could not read the file: {0}")]
    Unreadable(#[source] serde_json::Error),
    /// Top-level value is not an array
    #[error("invalid file: expected a JSON list of runs")]
    NotAList,
    /// Every element was rejected by sanitization
    #[error("no valid runs found in the file")]
    NoValidRuns,
}

impl From<ImportError> for AppError {
    fn from(error: ImportError) -> Self {
        let code = match error {
            ImportError::Unreadable(_) => ErrorCode::SerializationError,
            ImportError::NotAList | ImportError::NoValidRuns => ErrorCode::InvalidFormat,
        };
        Self::new(code, error.to_string())
    }
}

/// Runs recovered from an import file
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBatch {
    /// Sanitized runs, in file order
    pub runs: Vec<Run>,
    /// Elements discarded by sanitization
    pub rejected: usize,
}

/// Parse a JSON backup
///
/// # Errors
///
/// Returns [`ImportError`] when the text is not JSON, not a list, or holds
/// no valid run at all.
pub fn parse_import(text: &str) -> Result<ImportBatch, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::Unreadable)?;
    let Value::Array(elements) = value else {
        warn!("Import rejected: top-level value is not a list");
        return Err(ImportError::NotAList);
    };

    let (runs, rejected) = sanitize_all(elements);
    if runs.is_empty() {
        warn!(rejected, "Import rejected: no valid runs");
        return Err(ImportError::NoValidRuns);
    }

    info!(accepted = runs.len(), rejected, "Parsed import file");
    Ok(ImportBatch { runs, rejected })
}

/// Export file kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON backup
    Json,
    /// Spreadsheet-friendly CSV
    Csv,
}

impl ExportFormat {
    /// File extension without dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Pretty-printed JSON array of runs
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_json(runs: &[Run]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(runs)?)
}

fn optional_cell(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// CSV export with a header row; missing heart rates are blank cells
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn export_csv(runs: &[Run]) -> AppResult<String> {
    let csv_error = |e: csv::Error| AppError::serialization("CSV export failed").with_source(e);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for run in runs {
        writer
            .write_record([
                run.date().to_string(),
                format!("{:.2}", run.distance_km()),
                run.duration_sec().to_string(),
                run.pace_sec_per_km().to_string(),
                optional_cell(run.avg_hr()),
                optional_cell(run.max_hr()),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::from(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AppError::serialization("CSV export is not UTF-8").with_source(e))
}

/// Suggested download name, stamped with `today`
#[must_use]
pub fn export_file_name(format: ExportFormat, today: NaiveDate) -> String {
    let kind = match format {
        ExportFormat::Json => "backup",
        ExportFormat::Csv => "export",
    };
    format!("runlog-{kind}-{today}.{}", format.extension())
}
