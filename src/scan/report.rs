use super::{BlockKind, FileDuplicates};
use crate::report_helpers;

fn kind_label(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::FunctionLike => "function",
        BlockKind::ClassLike => "class",
        BlockKind::ObjectLiteral => "object",
        BlockKind::CssRule => "css rule",
    }
}

/// Print a human-readable listing of duplicate groups per file.
pub fn print_report(results: &[FileDuplicates]) {
    if results.is_empty() {
        println!("No duplicate blocks found.");
        return;
    }

    let separator = report_helpers::separator(68);
    let total_groups: usize = results.iter().map(|file| file.groups.len()).sum();

    println!("{separator}");
    println!(" Duplicate Blocks");
    println!("{separator}");

    for file in results {
        println!();
        println!(" {} [{}]", file.path.display(), file.language);
        for group in &file.groups {
            let spans: Vec<String> = group
                .occurrences
                .iter()
                .map(|range| format!("{}-{}", range.start.line + 1, range.end.line + 1))
                .collect();
            println!(
                "   {:<28} {:<9} {} occurrences, lines {}",
                group.name,
                kind_label(group.kind),
                group.occurrences.len(),
                spans.join(", ")
            );
        }
    }

    println!();
    println!("{separator}");
    println!(
        " {total_groups} duplicate groups in {} file{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    );
}

/// Print scan results as pretty JSON.
pub fn print_json(results: &[FileDuplicates]) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&results)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
