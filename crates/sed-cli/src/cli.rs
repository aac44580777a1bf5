//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sed_core::Category;

/// Seafarer day tracker.
///
/// Checks a log of working days against the residency-abroad rules of a
/// seafarers' earnings deduction claim.
#[derive(Debug, Parser)]
#[command(name = "sedt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Entries file (JSON array), or `-` for stdin. Overrides the configured path.
    #[arg(short, long, global = true)]
    pub entries: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a claim period against the residency rules.
    Analyze {
        /// First day of the claim period (YYYY-MM-DD).
        #[arg(long)]
        start: Option<String>,

        /// Last day of the claim period (YYYY-MM-DD).
        #[arg(long)]
        end: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show day totals per category, ship and country.
    Summary {
        /// Earliest day to include.
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest day to include.
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Only this category (work_ship, work_land, vacation, travel).
        #[arg(long)]
        category: Option<Category>,

        /// Only entries whose ship, country or notes contain this text.
        #[arg(long)]
        keyword: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check whether a claim period is long enough to evaluate.
    Period {
        /// First day of the claim period (YYYY-MM-DD).
        #[arg(long)]
        start: String,

        /// Last day of the claim period (YYYY-MM-DD).
        #[arg(long)]
        end: String,

        /// Minimum length in days (defaults to the configured value).
        #[arg(long)]
        min_days: Option<i64>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
