// ABOUTME: Re-exports helper modules for the runlog CLI
// ABOUTME: Provides terminal display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

pub mod display;
