//! CLI argument parsing for bibnotes
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Bibnotes - notes files for bibliographic document records
#[derive(Parser, Debug)]
#[command(name = "bibnotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ~/.config/bibnotes/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `info`, `bibnotes_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the notes path of a document, assigning a file name if needed
    Path {
        /// Document folder
        folder: PathBuf,
    },

    /// Create the notes file of a document if it does not exist yet
    Ensure {
        /// Document folder
        folder: PathBuf,

        /// Do not append text extracted from attached files
        #[arg(long)]
        notext: bool,
    },

    /// Ensure the notes file exists and open it in an editor
    Edit {
        /// Document folder
        folder: PathBuf,

        /// Do not append text extracted from attached files
        #[arg(long)]
        notext: bool,

        /// Editor command (overrides config, $EDITOR and $VISUAL)
        #[arg(long)]
        editor: Option<String>,
    },

    /// Show whether a document has notes, without changing anything
    Show {
        /// Document folder
        folder: PathBuf,
    },
}
