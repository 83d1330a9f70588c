// ABOUTME: Main library entry point for the runlog running-log tracker
// ABOUTME: Wires the run store, persistence backends, import/export, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

#![deny(unsafe_code)]

//! # Runlog
//!
//! A personal running log. Runs are entered through validated forms or
//! imported from JSON backups, kept in a single in-memory collection, and
//! summarized on demand into windowed statistics, goal progress and heart
//! rate zones.
//!
//! ## Architecture
//!
//! - **`runlog_core`**: errors, constants, `Run`/`Settings` models, input parsers and formatters
//! - **`runlog_intelligence`**: the stats engine and zone calculator, pure functions over runs
//! - **store**: [`RunLog`], the only holder of mutable state, with sanitize, merge and validation
//! - **persistence**: pluggable async backends storing the two JSON blobs
//! - **transfer**: JSON backup import, JSON and CSV export
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use runlog::persistence::MemoryRepository;
//! use runlog::store::validation::RunForm;
//! use runlog::RunLog;
//! use runlog_core::errors::AppResult;
//! use runlog_core::models::Settings;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> AppResult<()> {
//!     let repository = MemoryRepository::new();
//!     let mut log = RunLog::load(&repository, Settings::default()).await?;
//!
//!     log.submit(&RunForm {
//!         date: "2024-01-10".into(),
//!         distance: "10".into(),
//!         time: "50:00".into(),
//!         avg_hr: "150".into(),
//!         max_hr: Some("170".into()),
//!         notes: String::new(),
//!     })?;
//!
//!     println!("{} runs", log.stats().total_runs);
//!     log.persist(&repository).await
//! }
//! ```

/// Environment configuration
pub mod config;

/// Tracing subscriber setup
pub mod logging;

/// Storage backends for runs and settings
pub mod persistence;

/// Run collection state, sanitization, merging and form validation
pub mod store;

/// JSON import and JSON/CSV export
pub mod transfer;

pub use store::RunLog;

pub use runlog_core;
pub use runlog_intelligence;
