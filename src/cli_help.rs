//! Long help text constants for CLI subcommands.

/// Duplicate detection across a file or directory tree.
pub const SCAN: &str = "\
Detect duplicate top-level blocks in a file or directory.

Supported languages (by extension, or forced with --language):
  javascript / typescript (+ react variants)   functions, classes,
                                               interfaces, enums,
                                               object literals
  css / scss / less                            rule blocks by selector
  python                                       defs and classes

Detection is lexical (brace and indentation matching with comment
awareness), not a full parse. Constructs are grouped by name; a group
surfaces only when a name has two or more non-overlapping occurrences.
Directories are walked respecting .gitignore.";

/// Merging duplicate groups inside one file.
pub const MERGE: &str = "\
Merge duplicate blocks in a single file.

Each duplicate group collapses to one occurrence. The merged text is
printed to stdout unless --write rewrites the file in place; --json
prints a summary instead of the text.

Strategies:
  keep-last   The bottom-most occurrence's content is authoritative.
              JS/TS and Python replace the first occurrence with it and
              delete the rest; CSS keeps it at the last occurrence's
              position. This is the default.
  union       JavaScript/TypeScript only: rebuild one block from the
              distinct body lines, object properties, or simple methods
              of all occurrences (first seen wins), inserted once after
              the last occurrence.

Blank lines left behind by removed blocks are swallowed when a deleted
occurrence is not adjacent to its neighbor. Groups that fail to merge
are skipped and reported; they never abort the run.";
