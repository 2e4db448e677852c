/// Balanced-delimiter matching that ignores delimiters inside comments.
use super::comment::is_inside_comment;

/// Find the balanced closing delimiter for the first `open` at or after
/// `open_index`. Returns the byte index of the closing delimiter, or
/// `None` when the text runs out before the depth returns to zero
/// (unbalanced input is "no block here", not an error).
pub fn find_matching_delimiter(
    text: &str,
    open_index: usize,
    open: u8,
    close: u8,
) -> Option<usize> {
    let bytes = text.as_bytes();
    if open_index >= bytes.len() {
        return None;
    }

    let mut depth = 0usize;
    let mut i = open_index;
    while i < bytes.len() {
        if bytes[i] == open && !is_inside_comment(text, i) {
            depth = 1;
            i += 1;
            break;
        }
        i += 1;
    }
    if depth == 0 {
        return None;
    }

    while i < bytes.len() {
        if bytes[i] == open && !is_inside_comment(text, i) {
            depth += 1;
        } else if bytes[i] == close && !is_inside_comment(text, i) {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}

/// Brace-delimited block extent: from `match_start`, locate the first
/// uncommented `{` and return the index one past its matching `}`.
pub fn find_block_end(text: &str, match_start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = match_start;
    while i < bytes.len() {
        if bytes[i] == b'{' && !is_inside_comment(text, i) {
            return find_matching_delimiter(text, i, b'{', b'}').map(|close| close + 1);
        }
        i += 1;
    }
    None
}

#[cfg(test)]
#[path = "braces_test.rs"]
mod tests;
