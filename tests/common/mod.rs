/// Shared test helpers for all plumb integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
pub mod generators;

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use plumb_core::config::PlumbConfig;
use plumb_enforce::codes::Code;
use plumb_enforce::engine::LintEngine;
use tempfile::TempDir;

/// Create a project from a set of source files.
///
/// Each entry in `files` is `(relative_path, content)`.
/// Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn setup_project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
    }
    dir
}

/// Get path to compiled plumb binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn plumb_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("plumb");
    if path.exists() {
        return path;
    }
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let status = Command::new("cargo")
        .args(["build", "-p", "plumb-cli"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build plumb");
    assert!(status.success(), "Failed to build plumb binary");
    workspace.join("target/debug/plumb")
}

/// Codes reported for `src` with the default configuration.
#[allow(dead_code)]
pub fn lint_codes(src: &str) -> Vec<Code> {
    LintEngine::new(PlumbConfig::default())
        .lint_source("test.php", src)
        .codes()
}

/// Read a PHP fixture from `tests/fixtures/php`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/php")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {}: {}", path.display(), e))
}
