/// Edit planning.
///
/// Turns (group, merged content) pairs into a sequence of text
/// operations over original-document coordinates. Ops come out in
/// strictly descending order so sequential application never moves a
/// not-yet-applied range.
use super::strategy::{EditShape, MergeContent};
use crate::scan::DuplicateGroup;
use crate::text::{Position, Range};

/// A single text operation in original-document coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Delete(Range),
    Replace(Range, String),
    Insert(Position, String),
}

impl EditOp {
    /// Ordering anchor; also the topmost point the op touches.
    pub fn anchor(&self) -> Position {
        match self {
            EditOp::Delete(range) | EditOp::Replace(range, _) => range.start,
            EditOp::Insert(position, _) => *position,
        }
    }
}

/// Planned operations plus merge accounting.
#[derive(Debug)]
pub struct EditPlan {
    pub ops: Vec<EditOp>,
    pub merged: usize,
    pub skipped: usize,
}

/// Build the edit plan for all groups. A group whose occurrences turn
/// out to overlap is skipped with a warning, not fatal.
pub fn plan(text: &str, groups: &[(DuplicateGroup, MergeContent)]) -> EditPlan {
    let lines: Vec<&str> = text.split('\n').collect();

    // Bottom-most group first.
    let mut ordered: Vec<&(DuplicateGroup, MergeContent)> = groups.iter().collect();
    ordered.sort_by(|a, b| b.0.occurrences[0].start.cmp(&a.0.occurrences[0].start));

    let mut ops: Vec<EditOp> = Vec::new();
    let mut merged = 0usize;
    let mut skipped = 0usize;

    for (group, content) in ordered {
        let mut occurrences = group.occurrences.clone();
        occurrences.sort_by_key(|range| range.start);

        if occurrences.len() < 2 || has_overlap(&occurrences) {
            eprintln!("warning: skipping group '{}': overlapping occurrences", group.name);
            skipped += 1;
            continue;
        }

        match content.shape {
            EditShape::ReplaceFirstKeepLast => {
                let first = occurrences[0];
                let mut deletions: Vec<Range> = occurrences[1..]
                    .iter()
                    .map(|occurrence| deletion_range(&lines, occurrence, first.end.line))
                    .collect();
                clamp_to_predecessors(&mut deletions);
                for deletion in deletions.into_iter().rev() {
                    ops.push(EditOp::Delete(deletion));
                }
                ops.push(EditOp::Replace(first, content.content.clone()));
            }
            EditShape::DeleteAllInsertMerged => {
                let last = occurrences[occurrences.len() - 1];
                ops.push(EditOp::Insert(last.end, content.content.clone()));

                // Every occurrence but the last may swallow neighboring
                // blank lines; the last is deleted verbatim so the insert
                // anchor stays outside every deletion.
                let mut deletions: Vec<Range> = occurrences
                    .iter()
                    .enumerate()
                    .map(|(i, occurrence)| {
                        if i + 1 < occurrences.len() {
                            deletion_range(&lines, occurrence, occurrences[i + 1].start.line)
                        } else {
                            *occurrence
                        }
                    })
                    .collect();
                clamp_to_predecessors(&mut deletions);
                for deletion in deletions.into_iter().rev() {
                    ops.push(EditOp::Delete(deletion));
                }
            }
        }
        merged += 1;
    }

    // Groups never overlap, but their extents may interleave; a global
    // descending sort keeps sequential application safe either way.
    ops.sort_by(|a, b| b.anchor().cmp(&a.anchor()));

    EditPlan { ops, merged, skipped }
}

fn has_overlap(sorted: &[Range]) -> bool {
    sorted
        .windows(2)
        .any(|pair| pair[0].overlaps(&pair[1]))
}

/// Deletion range for a removed occurrence. When the occurrence is more
/// than one line away from its kept neighbor, the range grows over the
/// adjacent blank lines so the merge leaves no orphan gaps.
fn deletion_range(lines: &[&str], occurrence: &Range, neighbor_line: usize) -> Range {
    if occurrence.start.line > neighbor_line + 1 || neighbor_line > occurrence.end.line + 1 {
        expand_blank_lines(lines, occurrence)
    } else {
        *occurrence
    }
}

/// Grow a range over immediately adjacent blank lines in both
/// directions.
fn expand_blank_lines(lines: &[&str], range: &Range) -> Range {
    let mut start_line = range.start.line;
    let mut end_line = range.end.line;

    while start_line > 0 && lines[start_line - 1].trim().is_empty() {
        start_line -= 1;
    }
    while end_line + 1 < lines.len() && lines[end_line + 1].trim().is_empty() {
        end_line += 1;
    }

    Range::new(
        Position { line: start_line, column: 0 },
        Position { line: end_line, column: lines[end_line].len() },
    )
}

/// Expanded deletions of neighboring occurrences can meet inside a
/// shared blank gap; pull each range's start up to its predecessor's
/// end so the sequence stays non-overlapping.
fn clamp_to_predecessors(ranges: &mut [Range]) {
    for i in 1..ranges.len() {
        if ranges[i].start < ranges[i - 1].end {
            ranges[i].start = ranges[i - 1].end;
        }
    }
}

#[cfg(test)]
#[path = "planner_test.rs"]
mod tests;
