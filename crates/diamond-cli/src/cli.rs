//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Diamond: field attribute summaries for park listings
#[derive(Parser)]
#[command(name = "diamond")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize every attribute into a common value plus exceptions
    Summarize {
        /// Path to the field list (JSON, CSV or TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// JSON file with tolerance and dominance settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump discovered keys, raw summaries and source metadata as JSON
    Inspect {
        /// Path to the field list (JSON, CSV or TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// JSON file with tolerance and dominance settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List discovered attribute keys with their display group
    Keys {
        /// Path to the field list (JSON, CSV or TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
