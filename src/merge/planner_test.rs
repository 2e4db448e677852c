use super::*;
use crate::scan::{BlockKind, DuplicateGroup};
use crate::text::Position;

fn range(start: (usize, usize), end: (usize, usize)) -> Range {
    Range::new(
        Position { line: start.0, column: start.1 },
        Position { line: end.0, column: end.1 },
    )
}

fn group(name: &str, occurrences: Vec<Range>) -> DuplicateGroup {
    DuplicateGroup {
        name: name.to_string(),
        occurrences,
        kind: BlockKind::FunctionLike,
        language: "javascript",
    }
}

fn keep_last(content: &str) -> MergeContent {
    MergeContent {
        content: content.to_string(),
        shape: EditShape::ReplaceFirstKeepLast,
    }
}

#[test]
fn ops_come_out_bottom_to_top() {
    let text = "\
function a() { x(); }
function b() { y(); }
function a() { z(); }
function b() { w(); }
";
    let groups = vec![
        (
            group("a", vec![range((0, 0), (0, 21)), range((2, 0), (2, 21))]),
            keep_last("function a() { z(); }"),
        ),
        (
            group("b", vec![range((1, 0), (1, 21)), range((3, 0), (3, 21))]),
            keep_last("function b() { w(); }"),
        ),
    ];

    let plan = plan(text, &groups);
    assert_eq!(plan.merged, 2);
    assert_eq!(plan.skipped, 0);
    for pair in plan.ops.windows(2) {
        assert!(pair[0].anchor() > pair[1].anchor());
    }
}

#[test]
fn deletion_swallows_adjacent_blank_lines() {
    let text = "\
function f() {
    a();
}



function f() {
    b();
}
";
    let groups = vec![(
        group("f", vec![range((0, 0), (2, 1)), range((6, 0), (8, 1))]),
        keep_last("function f() {\n    b();\n}"),
    )];

    let plan = plan(text, &groups);
    assert_eq!(plan.merged, 1);
    // The second occurrence sits four lines below the first, so its
    // deletion grows over the blank gap above it and the empty final
    // line below it.
    assert!(plan.ops.contains(&EditOp::Delete(range((3, 0), (9, 0)))));
}

#[test]
fn overlapping_occurrences_skip_the_group() {
    let text = "line0\nline1\nline2\nline3\n";
    let groups = vec![(
        group("bad", vec![range((0, 0), (2, 0)), range((1, 0), (3, 0))]),
        keep_last("whatever"),
    )];

    let plan = plan(text, &groups);
    assert_eq!(plan.merged, 0);
    assert_eq!(plan.skipped, 1);
    assert!(plan.ops.is_empty());
}

#[test]
fn insert_lands_after_the_last_occurrence() {
    let text = ".x { a: 1; }\n.x { b: 2; }\n";
    let groups = vec![(
        group("x", vec![range((0, 0), (0, 12)), range((1, 0), (1, 12))]),
        MergeContent {
            content: ".x { b: 2; }".to_string(),
            shape: EditShape::DeleteAllInsertMerged,
        },
    )];

    let plan = plan(text, &groups);
    assert_eq!(plan.merged, 1);
    assert_eq!(
        plan.ops[0],
        EditOp::Insert(Position { line: 1, column: 12 }, ".x { b: 2; }".to_string())
    );
    // Both occurrences are deleted, bottom first.
    assert_eq!(plan.ops[1], EditOp::Delete(range((1, 0), (1, 12))));
    assert_eq!(plan.ops[2], EditOp::Delete(range((0, 0), (0, 12))));
}
