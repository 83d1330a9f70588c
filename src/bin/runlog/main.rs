// ABOUTME: Runlog CLI - command-line front end for the running log
// ABOUTME: Adds, edits and lists runs, shows the stats dashboard, manages settings and backups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors
//!
//! Usage:
//! ```bash
//! # Log a run (date defaults to today)
//! runlog add --distance 10 --time 50:00 --avg-hr 150 --max-hr 170
//!
//! # Show the dashboard
//! runlog stats
//!
//! # Correct a run
//! runlog edit 3f2c... --time 49:30
//!
//! # Preview heart rate zones for a max heart rate
//! runlog zones --max-hr 190
//!
//! # Update goals
//! runlog settings set --weekly-goal 35 --target-pace 5:15
//!
//! # Back up and restore
//! runlog export json --output backup.json
//! runlog import backup.json
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand, ValueEnum};
use runlog::config::RunlogConfig;
use runlog::persistence::JsonFileRepository;
use runlog::transfer::ExportFormat;
use runlog::RunLog;
use runlog_core::errors::AppResult;
use std::path::PathBuf;
use tracing::{debug, info};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "runlog",
    about = "Personal running log",
    long_about = "Track runs, weekly and monthly goals, paces and heart rate zones."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to RUNLOG_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Run fields as entered on the command line
#[derive(Args)]
struct RunFields {
    /// Run date, YYYY-MM-DD
    #[arg(long)]
    date: Option<String>,

    /// Distance in km (decimal point or comma)
    #[arg(long)]
    distance: Option<String>,

    /// Time as mm:ss or hh:mm:ss
    #[arg(long)]
    time: Option<String>,

    /// Average heart rate
    #[arg(long)]
    avg_hr: Option<String>,

    /// Maximum heart rate
    #[arg(long)]
    max_hr: Option<String>,

    /// Free-text notes
    #[arg(long)]
    notes: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Log a new run
    Add {
        #[command(flatten)]
        fields: RunFields,
    },

    /// Change fields of an existing run
    Edit {
        /// Run identifier
        id: String,

        #[command(flatten)]
        fields: RunFields,
    },

    /// Delete one run
    Delete {
        /// Run identifier
        id: String,
    },

    /// Delete every run
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// List runs, newest first
    List {
        /// Show only the most recent runs
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show the statistics dashboard
    Stats {
        /// Print the raw snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show heart rate zone boundaries
    Zones {
        /// Preview for this max heart rate instead of the saved one
        #[arg(long)]
        max_hr: Option<u32>,
    },

    /// Settings management
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Merge runs from a JSON backup
    Import {
        /// Backup file
        path: PathBuf,
    },

    /// Export all runs
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportKind,

        /// Output file (defaults to a dated name in the current directory)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SettingsCommand {
    /// Show current settings
    Show,

    /// Update settings; omitted fields keep their value, an empty value clears a goal
    Set {
        /// Weekly distance goal in km
        #[arg(long)]
        weekly_goal: Option<String>,

        /// Monthly distance goal in km
        #[arg(long)]
        monthly_goal: Option<String>,

        /// Target pace as mm:ss per km
        #[arg(long)]
        target_pace: Option<String>,

        /// Maximum heart rate
        #[arg(long)]
        max_hr: Option<String>,
    },

    /// Restore default settings
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportKind {
    Json,
    Csv,
}

impl From<ExportKind> for ExportFormat {
    fn from(kind: ExportKind) -> Self {
        match kind {
            ExportKind::Json => Self::Json,
            ExportKind::Csv => Self::Csv,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RunlogConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    logging.init()?;

    info!(data_dir = %config.data_dir.display(), "Runlog CLI");

    let repository = JsonFileRepository::new(&config.data_dir);
    let mut log = RunLog::load(&repository, config.default_settings()?).await?;

    // Execute command
    let changed = match cli.command {
        Command::Add { fields } => commands::runs::add(&mut log, fields.into())?,
        Command::Edit { id, fields } => commands::runs::edit(&mut log, &id, fields.into())?,
        Command::Delete { id } => commands::runs::delete(&mut log, &id)?,
        Command::Clear { yes } => commands::runs::clear(&mut log, yes),
        Command::List { limit } => commands::runs::list(&log, limit),
        Command::Stats { json } => commands::stats::dashboard(&log, json)?,
        Command::Zones { max_hr } => commands::stats::zones(&log, max_hr),
        Command::Settings { action } => match action {
            SettingsCommand::Show => commands::settings::show(&log),
            SettingsCommand::Set {
                weekly_goal,
                monthly_goal,
                target_pace,
                max_hr,
            } => commands::settings::set(
                &mut log,
                commands::settings::SettingsChanges {
                    weekly_goal,
                    monthly_goal,
                    target_pace,
                    max_hr,
                },
            )?,
            SettingsCommand::Reset => commands::settings::reset(&mut log),
        },
        Command::Import { path } => commands::transfer::import(&mut log, &path).await?,
        Command::Export { format, output } => {
            commands::transfer::export(&log, format.into(), output).await?
        }
    };

    if changed {
        log.persist(&repository).await?;
    } else {
        debug!("No changes to persist");
    }

    Ok(())
}

impl From<RunFields> for commands::runs::RunChanges {
    fn from(fields: RunFields) -> Self {
        Self {
            date: fields.date,
            distance: fields.distance,
            time: fields.time,
            avg_hr: fields.avg_hr,
            max_hr: fields.max_hr,
            notes: fields.notes,
        }
    }
}
