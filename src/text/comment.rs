/// True when `offset` falls inside a line or block comment, for C-family
/// and CSS sources.
///
/// Line comments: a `//` between the start of the physical line and the
/// offset comments out everything after it. Block comments: a `/*`
/// opener after the last `*/` closer means the offset sits inside an
/// unterminated comment region.
///
/// Not a tokenizer: comment markers inside string literals are not
/// special-cased, so a `//` or `/*` appearing in a quoted string makes
/// the rest of its region look commented. Known limitation.
pub fn is_inside_comment(text: &str, offset: usize) -> bool {
    if offset >= text.len() || !text.is_char_boundary(offset) {
        return false;
    }
    let preceding = &text[..offset];

    let line_start = preceding.rfind('\n').map_or(0, |newline| newline + 1);
    if preceding[line_start..].contains("//") {
        return true;
    }

    match (preceding.rfind("/*"), preceding.rfind("*/")) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

#[cfg(test)]
#[path = "comment_test.rs"]
mod tests;
