/// Duplicate block detection.
///
/// One scanner per language family, all behind the same capability
/// interface: `find_duplicates` returns named groups of repeated
/// top-level constructs, `merge_blocks` extracts the keep-last content
/// for a group. Languages without a dedicated scanner resolve to a
/// no-op fallback so the rest of the pipeline needs no special cases.
pub(crate) mod css;
pub(crate) mod javascript;
pub(crate) mod noop;
pub(crate) mod python;
pub(crate) mod report;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::lang;
use crate::text::{Range, slice_range};
use crate::walk;

/// Category of a detected construct; drives the merge strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    FunctionLike,
    ClassLike,
    ObjectLiteral,
    CssRule,
}

/// One named construct detected at two or more locations.
///
/// Occurrences are in document order and pairwise non-overlapping; a
/// nested match inside an already-claimed block is discarded by the
/// scanner, never reported as its own group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    pub name: String,
    pub occurrences: Vec<Range>,
    pub kind: BlockKind,
    pub language: &'static str,
}

/// A per-language duplicate detector. `find_duplicates` is a pure
/// function of the text: identical input yields identical groups in
/// identical order.
pub trait Scanner: Sync {
    fn find_duplicates(&self, text: &str) -> Vec<DuplicateGroup>;

    /// Verbatim text of the bottom-most occurrence, the default merge
    /// content for every language.
    fn merge_blocks(&self, text: &str, occurrences: &[Range]) -> Option<String> {
        occurrences
            .last()
            .map(|range| slice_range(text, range).to_string())
    }
}

/// Resolve a language identity to its scanner.
pub fn scanner_for(language: &str) -> &'static dyn Scanner {
    match language {
        "javascript" | "typescript" | "typescriptreact" | "javascriptreact" => {
            &javascript::JavaScriptScanner
        }
        "css" | "scss" | "less" => &css::CssScanner,
        "python" => &python::PythonScanner,
        _ => &noop::NoopScanner,
    }
}

/// Duplicate groups found in one file.
#[derive(Debug, Serialize)]
pub struct FileDuplicates {
    pub path: PathBuf,
    pub language: String,
    pub groups: Vec<DuplicateGroup>,
}

/// Scan a single file. Returns `None` when no language identity can be
/// resolved for it.
pub fn scan_file(
    path: &Path,
    language_override: Option<&str>,
) -> Result<Option<FileDuplicates>, Box<dyn Error>> {
    let language = match language_override.or_else(|| lang::detect(path)) {
        Some(id) => id.to_string(),
        None => return Ok(None),
    };
    let text = fs::read_to_string(path)?;
    let groups = scanner_for(&language).find_duplicates(&text);
    Ok(Some(FileDuplicates {
        path: path.to_path_buf(),
        language,
        groups,
    }))
}

/// Run the `scan` command over a file or directory tree.
pub fn run(path: &Path, json: bool, language: Option<&str>) -> Result<(), Box<dyn Error>> {
    let mut results: Vec<FileDuplicates> = Vec::new();

    if path.is_dir() {
        for entry in walk::walk(path) {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    eprintln!("warning: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            match scan_file(entry.path(), language) {
                Ok(Some(found)) if !found.groups.is_empty() => results.push(found),
                Ok(_) => {}
                Err(err) => eprintln!("warning: {}: {err}", entry.path().display()),
            }
        }
    } else {
        match scan_file(path, language)? {
            Some(found) => {
                if !found.groups.is_empty() {
                    results.push(found);
                }
            }
            None => eprintln!(
                "warning: {}: unrecognized language, nothing to scan",
                path.display()
            ),
        }
    }

    if json {
        report::print_json(&results)
    } else {
        report::print_report(&results);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
