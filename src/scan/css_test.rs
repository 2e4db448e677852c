use super::*;
use crate::scan::{BlockKind, Scanner};

fn scan(text: &str) -> Vec<crate::scan::DuplicateGroup> {
    CssScanner.find_duplicates(text)
}

#[test]
fn empty_text_has_no_duplicates() {
    assert!(scan("").is_empty());
}

#[test]
fn single_rule_is_not_a_duplicate() {
    assert!(scan(".btn { color: red; }\n").is_empty());
}

#[test]
fn duplicate_selectors() {
    let text = "\
.btn {
    color: red;
}

.btn {
    color: blue;
}
";
    let groups = scan(text);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, ".btn");
    assert_eq!(groups[0].kind, BlockKind::CssRule);
    assert_eq!(groups[0].occurrences.len(), 2);
}

#[test]
fn selector_text_is_matched_exactly() {
    // No normalization: formatting differences make selectors distinct.
    let text = "\
.a , .b { color: red; }
.a, .b { color: blue; }
";
    assert!(scan(text).is_empty());
}

#[test]
fn commented_rule_is_ignored() {
    let text = "\
/* .fake { color: red; } */
.real { color: red; }
.real { color: blue; }
";
    let groups = scan(text);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, ".real");
}

#[test]
fn nested_rules_stay_inside_their_parent() {
    let text = "\
.card {
    .title { color: red; }
}
.card {
    .title { color: blue; }
}
";
    let groups = scan(text);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, ".card");
    assert_eq!(groups[0].occurrences.len(), 2);
}

#[test]
fn header_without_selector_is_skipped() {
    assert!(scan("{ color: red; }").is_empty());
}

#[test]
fn unterminated_block_is_skipped() {
    let text = "\
.open {
    color: red;
.btn { color: red; }
.btn { color: blue; }
";
    // `.open` never closes; the first balanced block wins instead.
    let groups = scan(text);
    assert!(groups.iter().all(|group| group.name != ".open"));
}

#[test]
fn media_query_wrapper_counts_as_one_block() {
    let text = "\
@media (max-width: 600px) {
    .btn { color: red; }
}
@media (max-width: 600px) {
    .btn { color: blue; }
}
";
    let groups = scan(text);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "@media (max-width: 600px)");
}
