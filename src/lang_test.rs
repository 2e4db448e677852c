use super::*;
use std::path::Path;

#[test]
fn javascript_family() {
    assert_eq!(detect(Path::new("app.js")), Some("javascript"));
    assert_eq!(detect(Path::new("mod.mjs")), Some("javascript"));
    assert_eq!(detect(Path::new("view.jsx")), Some("javascriptreact"));
    assert_eq!(detect(Path::new("lib.ts")), Some("typescript"));
    assert_eq!(detect(Path::new("view.tsx")), Some("typescriptreact"));
}

#[test]
fn stylesheet_family() {
    assert_eq!(detect(Path::new("site.css")), Some("css"));
    assert_eq!(detect(Path::new("site.scss")), Some("scss"));
    assert_eq!(detect(Path::new("site.less")), Some("less"));
}

#[test]
fn python_family() {
    assert_eq!(detect(Path::new("tool.py")), Some("python"));
    assert_eq!(detect(Path::new("types.pyi")), Some("python"));
}

#[test]
fn unknown_extensions_are_not_detected() {
    assert_eq!(detect(Path::new("main.rs")), None);
    assert_eq!(detect(Path::new("README")), None);
    assert_eq!(detect(Path::new("noext.")), None);
}
