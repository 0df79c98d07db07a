//! Hygiene — source budgets for the `cookbook` crate.
//!
//! Loading and rendering must degrade on bad input instead of crashing the
//! viewer. Each pattern has a budget (ideally zero) that only ratchets down.

use std::fs;
use std::path::Path;

const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("println!(", 0),
    ("dbg!(", 0),
    ("#[allow(dead_code)]", 0),
];

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
fn source_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn source_tree_is_not_empty() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for (pattern, budget) in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|(path, content)| {
                let count = content.lines().filter(|line| line.contains(pattern)).count();
                (count > 0).then(|| format!("  {path}: {count}"))
            })
            .collect();
        let count: usize = files
            .iter()
            .map(|(_, content)| content.lines().filter(|line| line.contains(pattern)).count())
            .sum();
        if count > *budget {
            failures.push(format!("`{pattern}` found {count}, max {budget}\n{}", hits.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
