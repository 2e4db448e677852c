/// JavaScript / TypeScript scanner.
///
/// Signature regexes locate construct headers; the brace matcher
/// resolves each header to its full block extent. Candidates are then
/// sorted by start offset and greedily filtered so a nested construct
/// inside an already-claimed block is never reported on its own.
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{BlockKind, DuplicateGroup, Scanner};
use crate::text::braces::find_block_end;
use crate::text::comment::is_inside_comment;
use crate::text::{Range, offset_to_position};

struct Pattern {
    regex: Regex,
    kind: BlockKind,
}

/// Signature patterns in priority order. The order matters: when two
/// patterns match at the same offset the earlier one wins, so an arrow
/// function assignment is classified before a plain object literal.
static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    let table: [(&str, BlockKind); 8] = [
        // function declarations, with an optional TS return annotation
        (
            r"\bfunction\s+(\w+)\s*\([^)]*\)\s*(?::\s*\w+)?\s*\{",
            BlockKind::FunctionLike,
        ),
        // arrow function assignments
        (
            r"\b(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s*)?(?:\([^)]*\)|[^=]*?)\s*=>\s*\{",
            BlockKind::FunctionLike,
        ),
        // function expression assignments
        (
            r"\b(\w+)\s*=\s*(?:async\s*)?function\s*\([^)]*\)\s*(?::\s*\w+)?\s*\{",
            BlockKind::FunctionLike,
        ),
        (
            r"\bclass\s+(\w+)(?:\s+extends\s+\w+)?\s*\{",
            BlockKind::ClassLike,
        ),
        (r"\binterface\s+(\w+)\s*\{", BlockKind::ClassLike),
        (r"\benum\s+(\w+)\s*\{", BlockKind::ClassLike),
        (r"\btype\s+(\w+)\s*=\s*\{", BlockKind::ClassLike),
        // object literal assignments
        (
            r"\b(?:const|let|var)\s+(\w+)\s*=\s*\{",
            BlockKind::ObjectLiteral,
        ),
    ];
    table
        .into_iter()
        .map(|(pattern, kind)| Pattern {
            regex: Regex::new(pattern).expect("valid signature pattern"),
            kind,
        })
        .collect()
});

struct Candidate {
    name: String,
    kind: BlockKind,
    start: usize,
    end: usize,
}

pub(crate) struct JavaScriptScanner;

impl Scanner for JavaScriptScanner {
    fn find_duplicates(&self, text: &str) -> Vec<DuplicateGroup> {
        let mut candidates: Vec<Candidate> = Vec::new();

        for pattern in PATTERNS.iter() {
            for caps in pattern.regex.captures_iter(text) {
                let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let start = whole.start();
                if is_inside_comment(text, start) {
                    continue;
                }
                let Some(end) = find_block_end(text, start) else {
                    continue;
                };
                // header plus body, both braces present
                let block = &text[start..end];
                if !block.contains('{') || !block.contains('}') {
                    continue;
                }
                candidates.push(Candidate {
                    name: name.as_str().to_string(),
                    kind: pattern.kind,
                    start,
                    end,
                });
            }
        }

        // Stable sort: equal starts keep pattern priority order.
        candidates.sort_by_key(|candidate| candidate.start);

        let mut kept: Vec<Candidate> = Vec::new();
        let mut last_end = 0usize;
        for candidate in candidates {
            if candidate.start >= last_end {
                last_end = candidate.end;
                kept.push(candidate);
            }
        }

        group_candidates(text, kept)
    }
}

/// Group surviving candidates by name, preserving document order of
/// first discovery. Names with a single occurrence are never surfaced.
fn group_candidates(text: &str, candidates: Vec<Candidate>) -> Vec<DuplicateGroup> {
    let mut order: Vec<String> = Vec::new();
    let mut by_name: HashMap<String, Vec<(BlockKind, Range)>> = HashMap::new();

    for candidate in candidates {
        let range = Range::new(
            offset_to_position(text, candidate.start),
            offset_to_position(text, candidate.end),
        );
        if !by_name.contains_key(&candidate.name) {
            order.push(candidate.name.clone());
        }
        by_name
            .entry(candidate.name)
            .or_default()
            .push((candidate.kind, range));
    }

    let mut groups = Vec::new();
    for name in order {
        let Some(entries) = by_name.remove(&name) else {
            continue;
        };
        if entries.len() < 2 {
            continue;
        }
        groups.push(DuplicateGroup {
            name,
            kind: entries[0].0,
            occurrences: entries.into_iter().map(|(_, range)| range).collect(),
            language: "javascript",
        });
    }
    groups
}

#[cfg(test)]
#[path = "javascript_test.rs"]
mod tests;
