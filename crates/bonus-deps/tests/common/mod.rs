//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Write a `<id>.problem` file linking to each of `targets`.
pub fn write_problem(dir: &Path, id: &str, targets: &[&str]) {
    let bonuses: Vec<_> = targets
        .iter()
        .map(|t| serde_json::json!({"bonus": "unlock", "problem": t}))
        .collect();
    let content = serde_json::json!({ "bonuses": bonuses }).to_string();
    std::fs::write(dir.join(format!("{id}.problem")), content).expect("Failed to write problem");
}

/// Write raw content to a file in `dir`.
pub fn write_raw(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("Failed to write file");
}

/// Run the bonus-deps binary in the specified directory
pub fn run_bonus_deps_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bonus-deps"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute bonus-deps binary")
}

/// Edge lines (`"a" -> "b"`) of a DOT description, in file order.
pub fn edge_lines(dot: &str) -> Vec<String> {
    dot.lines()
        .filter(|l| l.contains("->"))
        .map(|l| l.trim().to_string())
        .collect()
}
