use std::path::Path;

/// Map a file extension to the language identity used by the scanner
/// registry. Identities follow editor language ids.
pub fn detect(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?;
    let id = match extension {
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "css" => "css",
        "scss" => "scss",
        "less" => "less",
        "py" | "pyi" => "python",
        _ => return None,
    };
    Some(id)
}

#[cfg(test)]
#[path = "lang_test.rs"]
mod tests;
