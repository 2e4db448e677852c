mod cli;
mod cli_help;
mod lang;
mod merge;
mod report_helpers;
mod scan;
mod text;
mod walk;

use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands, StrategyArg};
use merge::MergeStrategy;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { path, json, language } => {
            let target = path.unwrap_or_else(|| PathBuf::from("."));
            if let Err(err) = scan::run(&target, json, language.as_deref()) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Commands::Merge {
            path,
            write,
            json,
            strategy,
            language,
        } => {
            let strategy = match strategy {
                StrategyArg::KeepLast => MergeStrategy::KeepLast,
                StrategyArg::Union => MergeStrategy::Union,
            };
            if let Err(err) = merge::run(&path, write, json, strategy, language.as_deref()) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}
