use super::*;
use std::fs;

#[test]
fn walks_nested_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("a.js"), "x\n").unwrap();
    fs::write(dir.path().join("sub").join("b.css"), "y\n").unwrap();

    let files: Vec<_> = walk(dir.path())
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();

    assert!(files.contains(&"a.js".to_string()));
    assert!(files.contains(&"b.css".to_string()));
}

#[test]
fn skips_git_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git").join("HEAD"), "ref\n").unwrap();
    fs::write(dir.path().join("a.js"), "x\n").unwrap();

    let files: Vec<_> = walk(dir.path())
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();

    assert!(files.contains(&"a.js".to_string()));
    assert!(!files.contains(&"HEAD".to_string()));
}
