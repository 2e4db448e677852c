/// Coordinate mapping between flat byte offsets and (line, column)
/// positions, plus the range types shared by every scanner.
///
/// Columns count bytes since the last newline. Ranges are half-open:
/// `start` is included, `end` is not.
pub mod braces;
pub mod comment;

use serde::Serialize;

/// A zero-based document coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A half-open document region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Map a byte offset to a (line, column) position. Out-of-range offsets
/// (or offsets that split a multi-byte character) produce a warning and
/// the document start, so callers can carry on defensively.
pub fn offset_to_position(text: &str, offset: usize) -> Position {
    if offset > text.len() || !text.is_char_boundary(offset) {
        eprintln!(
            "warning: offset {offset} out of range for text of length {}",
            text.len()
        );
        return Position::default();
    }

    let prefix = &text[..offset];
    let line = prefix.bytes().filter(|&b| b == b'\n').count();
    let column = match prefix.rfind('\n') {
        Some(newline) => offset - newline - 1,
        None => offset,
    };
    Position { line, column }
}

/// Map a position back to a byte offset. Columns past the end of their
/// line clamp to the line end; lines past the end of the document clamp
/// to the document end.
pub fn position_to_offset(text: &str, position: Position) -> usize {
    let mut line_start = 0usize;
    for _ in 0..position.line {
        match text[line_start..].find('\n') {
            Some(newline) => line_start += newline + 1,
            None => return text.len(),
        }
    }
    let line_end = text[line_start..]
        .find('\n')
        .map_or(text.len(), |newline| line_start + newline);
    (line_start + position.column).min(line_end)
}

/// The text covered by a range.
pub fn slice_range<'a>(text: &'a str, range: &Range) -> &'a str {
    let start = position_to_offset(text, range.start);
    let end = position_to_offset(text, range.end).max(start);
    &text[start..end]
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
