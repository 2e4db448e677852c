use super::*;

#[test]
fn offset_at_document_start() {
    assert_eq!(
        offset_to_position("abc\ndef", 0),
        Position { line: 0, column: 0 }
    );
}

#[test]
fn offset_before_newline() {
    assert_eq!(
        offset_to_position("abc\ndef", 3),
        Position { line: 0, column: 3 }
    );
}

#[test]
fn offset_after_newline() {
    assert_eq!(
        offset_to_position("abc\ndef", 4),
        Position { line: 1, column: 0 }
    );
}

#[test]
fn offset_at_document_end() {
    assert_eq!(
        offset_to_position("abc\ndef", 7),
        Position { line: 1, column: 3 }
    );
}

#[test]
fn offset_out_of_range_recovers_to_start() {
    assert_eq!(
        offset_to_position("abc", 17),
        Position { line: 0, column: 0 }
    );
}

#[test]
fn position_roundtrip() {
    let text = "first\nsecond\nthird";
    for offset in [0, 5, 6, 12, 13, text.len()] {
        let position = offset_to_position(text, offset);
        assert_eq!(position_to_offset(text, position), offset);
    }
}

#[test]
fn position_clamps_past_line_end() {
    assert_eq!(
        position_to_offset("abc\ndef", Position { line: 0, column: 99 }),
        3
    );
}

#[test]
fn position_clamps_past_document_end() {
    assert_eq!(
        position_to_offset("abc\ndef", Position { line: 9, column: 0 }),
        7
    );
}

#[test]
fn slice_covers_range() {
    let text = "abc\ndef\nghi";
    let range = Range::new(
        Position { line: 1, column: 0 },
        Position { line: 1, column: 3 },
    );
    assert_eq!(slice_range(text, &range), "def");
}

#[test]
fn ranges_overlap_when_interleaved() {
    let a = Range::new(
        Position { line: 0, column: 0 },
        Position { line: 2, column: 0 },
    );
    let b = Range::new(
        Position { line: 1, column: 0 },
        Position { line: 3, column: 0 },
    );
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn adjacent_ranges_do_not_overlap() {
    let a = Range::new(
        Position { line: 0, column: 0 },
        Position { line: 1, column: 0 },
    );
    let b = Range::new(
        Position { line: 1, column: 0 },
        Position { line: 2, column: 0 },
    );
    assert!(!a.overlaps(&b));
}
