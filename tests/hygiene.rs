//! Hygiene budgets for production code under `src/`.
//!
//! A panic inside an event callback silently kills that listener for the
//! rest of the page, and a discarded `Result` hides a failed DOM call. Each
//! pattern below has a budget; the budget only ever shrinks.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget)` pairs checked against every production line.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

/// Production sources: every `.rs` under `src/` except sibling `*_test.rs`.
fn production_sources() -> Vec<(PathBuf, String)> {
    let mut pending = vec![Path::new(env!("CARGO_MANIFEST_DIR")).join("src")];
    let mut sources = Vec::new();
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            let is_rust = path.extension().is_some_and(|ext| ext == "rs");
            let is_test = path.file_name().is_some_and(|name| name.to_string_lossy().ends_with("_test.rs"));
            if is_rust && !is_test {
                if let Ok(text) = fs::read_to_string(&path) {
                    sources.push((path, text));
                }
            }
        }
    }
    sources
}

/// Lines containing `pattern`, as `path:line` locations.
fn offending_lines(sources: &[(PathBuf, String)], pattern: &str) -> Vec<String> {
    sources
        .iter()
        .flat_map(|(path, text)| {
            text.lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(move |(n, _)| format!("{}:{}", path.display(), n + 1))
        })
        .collect()
}

fn check(pattern: &str) {
    let Some(&(_, budget)) = BUDGETS.iter().find(|(p, _)| *p == pattern) else {
        panic!("no budget declared for {pattern}");
    };
    let hits = offending_lines(&production_sources(), pattern);
    assert!(
        hits.len() <= budget,
        "`{pattern}` used {} times, budget {budget}:\n  {}",
        hits.len(),
        hits.join("\n  ")
    );
}

#[test]
fn scan_sees_lib_and_skips_test_files() {
    let sources = production_sources();
    assert!(sources.iter().any(|(path, _)| path.ends_with("lib.rs")));
    assert!(sources.iter().all(|(path, _)| !path.to_string_lossy().ends_with("_test.rs")));
}

#[test]
fn unwrap_budget() {
    check(".unwrap()");
}

#[test]
fn expect_budget() {
    check(".expect(");
}

#[test]
fn panic_budget() {
    check("panic!(");
}

#[test]
fn unreachable_budget() {
    check("unreachable!(");
}

#[test]
fn todo_budget() {
    check("todo!(");
}

#[test]
fn unimplemented_budget() {
    check("unimplemented!(");
}

#[test]
fn silent_discard_budget() {
    check("let _ =");
}

#[test]
fn dot_ok_budget() {
    check(".ok()");
}

#[test]
fn allow_dead_code_budget() {
    check("#[allow(dead_code)]");
}
