use super::planner::EditOp;
use crate::text::position_to_offset;

/// Apply ops sequentially to `text`, returning the rewritten string.
///
/// Ops must arrive bottom-to-top in original-document coordinates (the
/// planner's output order): each op then edits strictly above every
/// previous edit, so positions resolved against the partially edited
/// buffer still agree with the original layout.
pub fn apply_edits(text: &str, ops: &[EditOp]) -> String {
    let mut result = text.to_string();
    for op in ops {
        match op {
            EditOp::Delete(range) => {
                let start = position_to_offset(&result, range.start);
                let end = position_to_offset(&result, range.end).max(start);
                result.replace_range(start..end, "");
            }
            EditOp::Replace(range, content) => {
                let start = position_to_offset(&result, range.start);
                let end = position_to_offset(&result, range.end).max(start);
                result.replace_range(start..end, content);
            }
            EditOp::Insert(position, content) => {
                let offset = position_to_offset(&result, *position);
                result.insert_str(offset, content);
            }
        }
    }
    result
}

#[cfg(test)]
#[path = "apply_test.rs"]
mod tests;
