//! CLI module for plotcycle
//!
//! Provides the command-line interface using clap.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plotcycle - inspect and apply plot lifecycle status changes
#[derive(Parser, Debug)]
#[command(name = "plotcycle")]
#[command(version)]
#[command(about = "Inspect and apply plot lifecycle status changes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Preview changes without writing plot files
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the status catalog with its classifications
    Statuses {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the legal next statuses of a status
    Next {
        /// Status code or name (e.g. EN_CRECIMIENTO or growing)
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a status change is legal
    Check {
        /// Current status
        from: String,

        /// Requested status
        to: String,
    },

    /// Print the whole transition graph
    Graph {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the status of a plot record file
    Apply {
        /// Path to the plot record JSON file
        #[arg(long)]
        plot: PathBuf,

        /// Requested status
        #[arg(long)]
        to: String,

        /// Reason recorded with the change
        #[arg(long)]
        reason: String,
    },

    /// Record a completed labor and apply any automatic status change
    Labor {
        /// Path to the plot record JSON file
        #[arg(long)]
        plot: PathBuf,

        /// Labor kind (e.g. MANTENIMIENTO or maintenance)
        #[arg(long)]
        kind: String,

        /// Labors completed earlier on the plot, comma separated
        #[arg(long, value_delimiter = ',')]
        completed: Vec<String>,

        /// Evaluation date (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Report whether a plot needs attention
    Attention {
        /// Path to the plot record JSON file
        #[arg(long)]
        plot: PathBuf,

        /// Evaluation date (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}
