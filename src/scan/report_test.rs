use super::*;
use crate::scan::{Scanner, javascript::JavaScriptScanner};
use std::path::PathBuf;

fn sample() -> Vec<FileDuplicates> {
    let text = "function f() { a(); }\nfunction f() { b(); }\n";
    vec![FileDuplicates {
        path: PathBuf::from("sample.js"),
        language: "javascript".to_string(),
        groups: JavaScriptScanner.find_duplicates(text),
    }]
}

#[test]
fn print_report_with_results() {
    print_report(&sample());
}

#[test]
fn print_report_empty() {
    print_report(&[]);
}

#[test]
fn print_json_serializes() {
    print_json(&sample()).unwrap();
}

#[test]
fn kind_labels_are_stable() {
    assert_eq!(kind_label(BlockKind::FunctionLike), "function");
    assert_eq!(kind_label(BlockKind::ClassLike), "class");
    assert_eq!(kind_label(BlockKind::ObjectLiteral), "object");
    assert_eq!(kind_label(BlockKind::CssRule), "css rule");
}
