/// Merge content selection.
///
/// Two policies: keep-last takes the bottom-most occurrence's verbatim
/// text; structural union rebuilds one block from the distinct lines,
/// properties, or methods of every occurrence, first seen wins. One
/// policy applies per run, never mixed across groups of one language.
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scan::{BlockKind, DuplicateGroup, Scanner};
use crate::text::slice_range;

/// How duplicate occurrences collapse into one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    KeepLast,
    Union,
}

/// Shape of the edit sequence the planner emits for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditShape {
    /// Replace the first occurrence with the merged content, delete the
    /// rest.
    ReplaceFirstKeepLast,
    /// Delete every occurrence and insert the merged content once at the
    /// last occurrence's position.
    DeleteAllInsertMerged,
}

/// Replacement content plus edit shape for one group.
#[derive(Debug)]
pub struct MergeContent {
    pub content: String,
    pub shape: EditShape,
}

/// Pick replacement content and edit shape for a group. `None` means the
/// group cannot be merged (no parsable header or body) and is skipped
/// without aborting the run.
pub fn select(
    text: &str,
    group: &DuplicateGroup,
    scanner: &dyn Scanner,
    strategy: MergeStrategy,
) -> Option<MergeContent> {
    match (group.language, strategy) {
        // CSS always keeps the last occurrence; applying it as a single
        // re-insert avoids any selector body parsing.
        ("css", _) => scanner
            .merge_blocks(text, &group.occurrences)
            .map(|content| MergeContent {
                content,
                shape: EditShape::DeleteAllInsertMerged,
            }),
        ("javascript", MergeStrategy::Union) => {
            union_content(text, group).map(|content| MergeContent {
                content,
                shape: EditShape::DeleteAllInsertMerged,
            })
        }
        _ => scanner
            .merge_blocks(text, &group.occurrences)
            .map(|content| MergeContent {
                content,
                shape: EditShape::ReplaceFirstKeepLast,
            }),
    }
}

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^{]+\{").expect("header pattern"));
static BODY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{(.*)\}$").expect("body pattern"));
static METHOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*\([^)]*\)\s*\{([^{}]*)\}").expect("method pattern"));

fn union_content(text: &str, group: &DuplicateGroup) -> Option<String> {
    let blocks: Vec<String> = group
        .occurrences
        .iter()
        .map(|range| slice_range(text, range).to_string())
        .collect();
    match group.kind {
        BlockKind::ObjectLiteral => merge_object_properties(&blocks),
        BlockKind::ClassLike => merge_class_methods(&blocks),
        BlockKind::FunctionLike | BlockKind::CssRule => merge_function_lines(&blocks),
    }
}

/// Union of function bodies: one copy of each distinct body line across
/// all occurrences, under the first occurrence's header.
fn merge_function_lines(blocks: &[String]) -> Option<String> {
    let mut header: Option<String> = None;
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<String> = Vec::new();

    for block in blocks {
        let block = block.trim();
        if header.is_none() {
            header = HEADER_RE.find(block).map(|m| m.as_str().to_string());
        }
        let Some(body) = BODY_RE.captures(block).and_then(|caps| caps.get(1)) else {
            continue;
        };
        for line in body.as_str().trim().split('\n') {
            let normalized = line.trim();
            if normalized.is_empty() || normalized.contains('}') {
                continue;
            }
            if seen.insert(normalized.to_string()) {
                merged.push(format!("    {normalized}"));
            }
        }
    }

    let header = header?;
    Some(format!("{header}\n{}\n}}", merged.join("\n")))
}

/// Union of object literals: `key: value` pairs split on the first
/// colon, trailing commas and semicolons stripped, first seen wins.
fn merge_object_properties(blocks: &[String]) -> Option<String> {
    let mut header: Option<String> = None;
    let mut keys: Vec<String> = Vec::new();
    let mut properties: HashMap<String, String> = HashMap::new();

    for block in blocks {
        let block = block.trim();
        if header.is_none() {
            header = HEADER_RE.find(block).map(|m| m.as_str().to_string());
        }
        let Some(body) = BODY_RE.captures(block).and_then(|caps| caps.get(1)) else {
            continue;
        };
        for line in body.as_str().trim().split('\n') {
            let mut entry = line.trim();
            entry = entry.strip_suffix(',').unwrap_or(entry);
            entry = entry.strip_suffix(';').unwrap_or(entry);
            if entry.is_empty() || entry.contains('}') {
                continue;
            }
            let Some(colon) = entry.find(':') else {
                continue;
            };
            let key = entry[..colon].trim();
            let value = entry[colon + 1..].trim();
            if key.is_empty() || value.is_empty() || properties.contains_key(key) {
                continue;
            }
            keys.push(key.to_string());
            properties.insert(key.to_string(), format!("    {key}: {value},"));
        }
    }

    // Occurrence ranges end one past the closing brace, so any trailing
    // semicolon stays in the text; the merged block must not add its own.
    let header = header?;
    let body: Vec<&str> = keys.iter().map(|key| properties[key].as_str()).collect();
    Some(format!("{header}\n{}\n}}", body.join("\n")))
}

/// Union of class bodies: one copy of each distinct simple method across
/// all occurrences, first seen wins.
fn merge_class_methods(blocks: &[String]) -> Option<String> {
    let mut header: Option<String> = None;
    let mut names: Vec<String> = Vec::new();
    let mut methods: HashMap<String, String> = HashMap::new();

    for block in blocks {
        let block = block.trim();
        if header.is_none() {
            header = HEADER_RE.find(block).map(|m| m.as_str().to_string());
        }
        let Some(body) = BODY_RE.captures(block).and_then(|caps| caps.get(1)) else {
            continue;
        };
        for caps in METHOD_RE.captures_iter(body.as_str()) {
            let (Some(name), Some(method_body)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            if methods.contains_key(name.as_str()) {
                continue;
            }
            names.push(name.as_str().to_string());
            methods.insert(
                name.as_str().to_string(),
                format!(
                    "    {}() {{\n        {}\n    }}",
                    name.as_str(),
                    method_body.as_str().trim()
                ),
            );
        }
    }

    let header = header?;
    let body: Vec<&str> = names.iter().map(|name| methods[name].as_str()).collect();
    Some(format!("{header}\n{}\n}}", body.join("\n\n")))
}

#[cfg(test)]
#[path = "strategy_test.rs"]
mod tests;
