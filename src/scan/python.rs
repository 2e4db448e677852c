/// Python scanner.
///
/// Line-based: `def` / `class` headers are recognized on trimmed lines,
/// decorator lines are consumed with the definition they annotate, and
/// block extents follow indentation. Every line claimed by a resolved
/// block is marked processed so definitions nested inside it are not
/// re-detected as top level. Nested defs starting on a line no resolved
/// block has claimed are not excluded by this mechanism; that is a known
/// limit of the heuristic, kept as is.
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use super::{BlockKind, DuplicateGroup, Scanner};
use crate::text::{Position, Range};

static CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^class\s+([A-Za-z_]\w*)\s*(?:\([^)]*\))?\s*:").expect("class pattern"));
static DEF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:async\s+)?def\s+([A-Za-z_]\w*)\s*\(.*\)\s*:").expect("def pattern"));

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn is_decorator(line: &str) -> bool {
    line.trim_start().starts_with('@')
}

/// Indentation-delimited block extent from a 0-based header line.
///
/// Blank and comment-only lines never terminate the block; neither does
/// a decorator line at base indentation, so a trailing decorator rides
/// with the block above it. The first line at indent <= base that is
/// none of those ends the block (exclusive).
fn block_range(lines: &[&str], start_line: usize) -> Range {
    let base = indentation(lines[start_line]);
    let mut end_line = start_line;

    for (i, line) in lines.iter().enumerate().skip(start_line + 1) {
        if is_ignorable(line) {
            end_line = i;
            continue;
        }
        if indentation(line) <= base && !is_decorator(line) {
            break;
        }
        end_line = i;
    }

    Range::new(
        Position { line: start_line, column: 0 },
        Position { line: end_line, column: lines[end_line].len() },
    )
}

pub(crate) struct PythonScanner;

impl Scanner for PythonScanner {
    fn find_duplicates(&self, text: &str) -> Vec<DuplicateGroup> {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut processed: HashSet<usize> = HashSet::new();
        let mut order: Vec<String> = Vec::new();
        let mut by_name: HashMap<String, Vec<(BlockKind, Range)>> = HashMap::new();

        let mut line_num = 0usize;
        while line_num < lines.len() {
            if processed.contains(&line_num) || is_ignorable(lines[line_num]) {
                line_num += 1;
                continue;
            }

            let mut line = lines[line_num];
            let mut decorator_lines: Vec<usize> = Vec::new();
            while is_decorator(line) && line_num + 1 < lines.len() {
                decorator_lines.push(line_num);
                line_num += 1;
                line = lines[line_num];
            }

            let trimmed = line.trim();
            let header = CLASS_RE
                .captures(trimmed)
                .map(|caps| (caps, BlockKind::ClassLike))
                .or_else(|| DEF_RE.captures(trimmed).map(|caps| (caps, BlockKind::FunctionLike)));

            if let Some((caps, kind)) = header
                && let Some(name) = caps.get(1)
            {
                let range = block_range(&lines, line_num);
                for claimed in range.start.line..=range.end.line {
                    processed.insert(claimed);
                }
                for &decorator in &decorator_lines {
                    processed.insert(decorator);
                }

                let name = name.as_str().to_string();
                if !by_name.contains_key(&name) {
                    order.push(name.clone());
                }
                by_name.entry(name).or_default().push((kind, range));
            }
            line_num += 1;
        }

        let mut groups = Vec::new();
        for name in order {
            let Some(mut entries) = by_name.remove(&name) else {
                continue;
            };
            if entries.len() < 2 {
                continue;
            }

            entries.sort_by_key(|(_, range)| range.start.line);
            let kind = entries[0].0;
            let mut non_overlapping: Vec<Range> = Vec::new();
            let mut last_end: Option<usize> = None;
            for (_, range) in entries {
                if last_end.is_none_or(|end| range.start.line > end) {
                    last_end = Some(range.end.line);
                    non_overlapping.push(range);
                }
            }

            if non_overlapping.len() > 1 {
                groups.push(DuplicateGroup {
                    name,
                    occurrences: non_overlapping,
                    kind,
                    language: "python",
                });
            }
        }
        groups
    }
}

#[cfg(test)]
#[path = "python_test.rs"]
mod tests;
