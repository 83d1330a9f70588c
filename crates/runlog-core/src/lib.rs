// ABOUTME: Core types and constants for the runlog running-log tracker
// ABOUTME: Foundation crate with error handling, run models, parsers, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

#![deny(unsafe_code)]

//! # Runlog Core
//!
//! Foundation crate providing shared types and constants for the runlog
//! workspace. Both the statistics engine and the run store depend on it, so it
//! is kept free of any computation beyond field-level derivations.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Validation limits, zone table, and defaults organized by domain
//! - **models**: `Run`, `RunId`, and `Settings`
//! - **parsers**: Entry-form input parsing (distances, times, heart rates, goals)
//! - **formatters**: Display formatting for paces, durations, and distances

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Run, Settings)
pub mod models;

/// Loosely-typed user input parsing
pub mod parsers;

/// Shared intelligence types (max heart rate estimate)
pub mod intelligence;

/// Human-readable formatting of run metrics
pub mod formatters;
