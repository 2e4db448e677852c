/// CLI argument definitions for the `bm` command.
///
/// Defines the subcommands and their arguments using the `clap` derive
/// macros; long help text lives in `cli_help.rs`.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli_help;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "bm", version, about = "Find and merge duplicate code blocks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Merge strategy selector exposed on the command line.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Keep the bottom-most occurrence's content verbatim
    KeepLast,
    /// Combine unique lines, properties, or methods from all occurrences
    Union,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Detect duplicate blocks in a file or directory
    #[command(long_about = cli_help::SCAN)]
    Scan {
        /// File or directory to scan (default: current directory)
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Language identity override (e.g. javascript, css, python)
        #[arg(long)]
        language: Option<String>,
    },

    /// Merge duplicate blocks in a single file
    #[command(long_about = cli_help::MERGE)]
    Merge {
        /// File to merge
        path: PathBuf,

        /// Rewrite the file in place instead of printing to stdout
        #[arg(short, long)]
        write: bool,

        /// Output a JSON summary instead of the merged text
        #[arg(long)]
        json: bool,

        /// How duplicate occurrences collapse into one block
        #[arg(long, value_enum, default_value_t = StrategyArg::KeepLast)]
        strategy: StrategyArg,

        /// Language identity override (e.g. javascript, css, python)
        #[arg(long)]
        language: Option<String>,
    },
}
