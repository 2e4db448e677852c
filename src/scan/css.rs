/// CSS / SCSS / Less scanner.
///
/// A single forward pass over the text: each uncommented `{` opens a
/// rule block, the brace matcher finds its end (consuming any nested
/// rules with it), and the selector is read backward from the brace to
/// the previous `}`, `;`, or line start. Selectors are grouped by their
/// raw trimmed text, so two selectors differing only in formatting are
/// distinct.
use std::collections::HashMap;

use super::{BlockKind, DuplicateGroup, Scanner};
use crate::text::braces::find_matching_delimiter;
use crate::text::comment::is_inside_comment;
use crate::text::{Range, offset_to_position};

pub(crate) struct CssScanner;

impl Scanner for CssScanner {
    fn find_duplicates(&self, text: &str) -> Vec<DuplicateGroup> {
        let bytes = text.as_bytes();
        let mut order: Vec<String> = Vec::new();
        let mut by_selector: HashMap<String, Vec<Range>> = HashMap::new();

        let mut index = 0usize;
        while index < text.len() {
            let Some(relative) = text[index..].find('{') else {
                break;
            };
            let open = index + relative;
            if is_inside_comment(text, open) {
                index = open + 1;
                continue;
            }
            let Some(close) = find_matching_delimiter(text, open, b'{', b'}') else {
                index = open + 1;
                continue;
            };

            // Selector runs from just after the previous block or
            // declaration up to the opening brace.
            let mut selector_start = open.saturating_sub(1);
            while selector_start > 0 {
                match bytes[selector_start] {
                    b'}' | b';' | b'\n' => {
                        selector_start += 1;
                        break;
                    }
                    _ => selector_start -= 1,
                }
            }

            let selector = text[selector_start..open].trim();
            // Empty headers and comment continuation lines are not rule
            // blocks. The `*` check also drops the universal selector.
            if selector.is_empty() || selector.starts_with("/*") || selector.starts_with('*') {
                index = close + 1;
                continue;
            }

            let range = Range::new(
                offset_to_position(text, selector_start),
                offset_to_position(text, close + 1),
            );
            if !by_selector.contains_key(selector) {
                order.push(selector.to_string());
            }
            by_selector.entry(selector.to_string()).or_default().push(range);

            index = close + 1;
        }

        let mut groups = Vec::new();
        for selector in order {
            let Some(occurrences) = by_selector.remove(&selector) else {
                continue;
            };
            if occurrences.len() < 2 {
                continue;
            }
            groups.push(DuplicateGroup {
                name: selector,
                occurrences,
                kind: BlockKind::CssRule,
                language: "css",
            });
        }
        groups
    }
}

#[cfg(test)]
#[path = "css_test.rs"]
mod tests;
