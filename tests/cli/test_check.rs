// `plumb check` end to end.

use std::fs;
use std::process::Command;

use super::common::{fixture, plumb_bin, setup_project};

#[test]
/// Clean project = empty stdout, exit 0.
fn test_check_clean_project() {
    let dir = setup_project(&[("src/clean.php", fixture("clean.php").as_str())]);
    let output = Command::new(plumb_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).trim().is_empty());
}

#[test]
fn test_check_reports_violations() {
    let dir = setup_project(&[("src/a.php", "<?php\nfunction f()\n{\n}\n")]);
    let output = Command::new(plumb_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("error[FunctionComment.Missing]: Missing function doc comment"));
    assert!(stdout.contains("src/a.php:2:1"));
}

#[test]
fn test_check_json_output() {
    let dir = setup_project(&[("a.php", "<?php\nfunction f()\n{\n}\n")]);
    let output = Command::new(plumb_bin())
        .args(["--json", "check", "a.php"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["command"], "check");
    assert_eq!(json["status"], "error");
    assert_eq!(json["files_analyzed"][0], "a.php");
    assert_eq!(json["errors"][0]["code"], "FunctionComment.Missing");
    assert_eq!(json["errors"][0]["rule"], "FunctionComment");
    assert_eq!(json["errors"][0]["severity"], "ERROR");
}

#[test]
fn test_check_suppress_flag() {
    let dir = setup_project(&[("a.php", "<?php\nfunction f()\n{\n}\n")]);
    let output = Command::new(plumb_bin())
        .args(["check", "--suppress", "FunctionComment.Missing"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("via --suppress flag"));
}

#[test]
fn test_check_honours_plumbignore_and_config() {
    let dir = setup_project(&[
        ("vendor/lib.php", "<?php\nfunction f()\n{\n}\n"),
        ("gen/out.php", "<?php\nfunction g()\n{\n}\n"),
        ("src/ok.php", fixture("clean.php").as_str()),
        (".plumbignore", "vendor/\n"),
    ]);
    fs::create_dir_all(dir.path().join(".plumb")).unwrap();
    fs::write(
        dir.path().join(".plumb/plumb.json"),
        r#"{ "ignore_patterns": ["gen/**"] }"#,
    )
    .unwrap();

    let output = Command::new(plumb_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
}
