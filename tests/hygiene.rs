//! Hygiene — enforces coding standards at test time
//!
//! Scans production sources under `src/` for antipatterns. Every budget is
//! zero: page behavior must surface failures as `UiError`, never crash the
//! module or drop an error on the floor.

use std::fs;
use std::path::Path;

/// (pattern, budget, what goes wrong)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics abort the WASM module"),
    (".expect(", 0, "panics abort the WASM module"),
    ("panic!(", 0, "panics abort the WASM module"),
    ("unreachable!(", 0, "panics abort the WASM module"),
    ("todo!(", 0, "stub left in production code"),
    ("unimplemented!(", 0, "stub left in production code"),
    ("let _ =", 0, "discards an error without inspecting it"),
    (".ok()", 0, "discards an error without inspecting it"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
    ("throw_val(", 0, "diverges past Rust destructors; return Err from the closure instead"),
];

/// Files allowed to name `web_sys` directly.
const BROWSER_GLUE: &[&str] = &["browser.rs", "app.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, reason) in BUDGETS {
        let hits = count_in_source(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!("{pattern} budget exceeded ({reason}): found {count}, max {budget}.\n{}", format_hits(&hits)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn web_sys_confined_to_browser_glue() {
    let files: Vec<SourceFile> = source_files()
        .into_iter()
        .filter(|f| !BROWSER_GLUE.iter().any(|name| f.path.ends_with(name)))
        .collect();
    let hits = count_in_source(&files, "web_sys");
    assert!(hits.is_empty(), "web_sys used outside browser glue:\n{}", format_hits(&hits));
}
