// `plumb fix` end to end.

use std::fs;
use std::process::Command;

use super::common::{fixture, plumb_bin, setup_project};

#[test]
fn test_fix_rewrites_files() {
    let dir = setup_project(&[("src/messy.php", fixture("messy.php").as_str())]);
    let output = Command::new(plumb_bin())
        .arg("fix")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("fixed src/messy.php"));
    assert_eq!(
        fs::read_to_string(dir.path().join("src/messy.php")).unwrap(),
        fixture("messy.fixed.php")
    );

    // Second run has nothing left to do.
    let output = Command::new(plumb_bin())
        .arg("fix")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No violations to fix."));
}

#[test]
fn test_fix_dry_run_leaves_files() {
    let dir = setup_project(&[("messy.php", fixture("messy.php").as_str())]);
    let output = Command::new(plumb_bin())
        .args(["--json", "fix", "--dry-run"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["status"], "fixed");
    assert!(json["files"][0]["applied"].as_u64().unwrap() > 0);
    assert_eq!(
        fs::read_to_string(dir.path().join("messy.php")).unwrap(),
        fixture("messy.php")
    );
}

#[test]
/// Violations without a fix leave the run partial.
fn test_fix_partial_exit_code() {
    let dir = setup_project(&[("a.php", "<?php\nfunction f()\n{\n}\n")]);
    let output = Command::new(plumb_bin())
        .arg("fix")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}
