//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query the PokéAPI catalog as tables
#[derive(Parser, Debug)]
#[command(name = "poketab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connection config file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered tables and their columns
    Tables,

    /// Stream the rows of a table
    List {
        /// Table name
        table: String,

        /// Columns to project (comma-separated, empty = all)
        #[arg(long)]
        columns: Option<String>,

        /// Stop after this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Look up one row by key (id or name)
    Get {
        /// Table name
        table: String,

        /// Key column value
        key: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one row per line)
    Json,
    /// Human-readable output
    Pretty,
}
