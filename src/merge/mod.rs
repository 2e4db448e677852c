/// Duplicate block merging.
///
/// Pipeline: scan the text, pick replacement content per group, plan a
/// bottom-to-top edit sequence, apply it. One failing group is skipped
/// and counted, never fatal for the run.
mod apply;
mod planner;
mod strategy;

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Serialize;

pub use planner::{EditOp, EditPlan};
pub use strategy::MergeStrategy;

use crate::lang;
use crate::report_helpers;
use crate::scan::{self, DuplicateGroup};
use strategy::MergeContent;

/// Outcome of merging one document.
#[derive(Debug, Serialize)]
pub struct MergeOutcome {
    pub merged: usize,
    pub skipped: usize,
    #[serde(skip)]
    pub text: String,
}

/// Detect duplicate groups in `text` and collapse each one.
pub fn merge_text(text: &str, language: &str, strategy: MergeStrategy) -> MergeOutcome {
    let scanner = scan::scanner_for(language);
    let groups = scanner.find_duplicates(text);

    let mut planned: Vec<(DuplicateGroup, MergeContent)> = Vec::new();
    let mut unmergeable = 0usize;
    for group in groups {
        match strategy::select(text, &group, scanner, strategy) {
            Some(content) => planned.push((group, content)),
            None => {
                eprintln!("warning: skipping group '{}': no mergeable content", group.name);
                unmergeable += 1;
            }
        }
    }

    let plan = planner::plan(text, &planned);
    let merged_text = apply::apply_edits(text, &plan.ops);
    MergeOutcome {
        merged: plan.merged,
        skipped: unmergeable + plan.skipped,
        text: merged_text,
    }
}

/// Run the `merge` command for one file.
pub fn run(
    path: &Path,
    write: bool,
    json: bool,
    strategy: MergeStrategy,
    language: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let language = match language.or_else(|| lang::detect(path)) {
        Some(id) => id.to_string(),
        None => {
            return Err(format!(
                "{}: unrecognized language (use --language)",
                path.display()
            )
            .into());
        }
    };

    let text = fs::read_to_string(path)?;
    let outcome = merge_text(&text, &language, strategy);

    if write {
        fs::write(path, &outcome.text)?;
    }

    if json {
        report_helpers::print_json_stdout(&outcome)?;
    } else {
        if !write {
            print!("{}", outcome.text);
        }
        eprintln!("{} blocks merged", outcome.merged);
        if outcome.skipped > 0 {
            eprintln!("{} groups skipped", outcome.skipped);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
