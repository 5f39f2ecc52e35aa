//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manage, validate, and analyse a library of JSON prompt records.
#[derive(Parser, Debug)]
#[command(name = "promptlab", version, about)]
pub struct Cli {
    /// Project root holding the prompts directory.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Schema file to validate against instead of the bundled one, relative
    /// to the project root.
    #[arg(long, global = true)]
    pub schema: Option<PathBuf>,

    /// Configuration file (defaults to `<root>/promptlab.toml` when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new prompt interactively.
    Create,
    /// Validate a prompt file or every prompt below a directory.
    Validate {
        /// File or directory to validate (defaults to the prompts directory).
        path: Option<PathBuf>,
    },
    /// List all prompts.
    List {
        /// Only list prompts of this category.
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show repository statistics.
    Stats,
    /// Corpus analytics.
    #[command(subcommand)]
    Analytics(AnalyticsCommand),
}

/// Subcommands of `analytics`.
#[derive(Subcommand, Debug)]
pub enum AnalyticsCommand {
    /// Print the full analytics report.
    Report {
        /// Also write the report to this file.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Compare how two models were tested across the corpus.
    Compare {
        /// First model identifier.
        first: String,
        /// Second model identifier.
        second: String,
    },
    /// Show the highest scoring prompts for a metric.
    Top {
        /// Number of prompts to show (defaults to the configured value).
        limit: Option<usize>,
        /// Metric to rank by (defaults to the configured value).
        #[arg(long, short)]
        metric: Option<String>,
    },
}
