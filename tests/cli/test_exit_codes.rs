// Exit codes: 0 clean, 1 violations, 2 internal failure.

use std::process::Command;

use super::common::{plumb_bin, setup_project};

const WARNING_ONLY: &str = "<?php
/**
 * Greets.
 *
 * @param string $name The name.
 *
 * @return string
 */
function greet($name)
{
    return $name;
}
";

#[test]
fn test_warnings_pass_unless_strict() {
    let dir = setup_project(&[("a.php", WARNING_ONLY)]);
    let output = Command::new(plumb_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("warning[FunctionComment.ScalarTypeHintMissing]"));

    let output = Command::new(plumb_bin())
        .args(["check", "--strict"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_path_is_internal_failure() {
    let dir = setup_project(&[]);
    let output = Command::new(plumb_bin())
        .args(["check", "does/not/exist.php"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("plumb check:"));
}

#[test]
fn test_empty_project_is_clean() {
    let dir = setup_project(&[]);
    let output = Command::new(plumb_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_unreadable_file_fails_both_commands() {
    let dir = setup_project(&[("good.php", WARNING_ONLY)]);
    std::fs::write(
        dir.path().join("latin1.php"),
        b"<?php\n/**\n * Caf\xe9.\n */\nfunction f() {}\n",
    )
    .unwrap();

    let output = Command::new(plumb_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("plumb check:"), "{}", stderr);
    assert!(stderr.contains("latin1.php"), "{}", stderr);
    // Readable files are still reported.
    assert!(String::from_utf8_lossy(&output.stdout).contains("good.php"));

    let output = Command::new(plumb_bin())
        .arg("fix")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}
