// Suppression through the engine, config, and summary.

use plumb_core::config::PlumbConfig;
use plumb_enforce::codes::Code;
use plumb_enforce::engine::LintEngine;
use plumb_enforce::types::Severity;

const UNDOCUMENTED: &str = "<?php\nfunction f()\n{\n}\n";

#[test]
/// Config-level suppress applies to every file the engine lints.
fn test_config_suppress() {
    let mut cfg = PlumbConfig::default();
    cfg.suppress = vec!["FunctionComment.Missing".to_string()];
    let engine = LintEngine::new(cfg);

    let report = engine.lint_source("a.php", UNDOCUMENTED);
    assert_eq!(report.codes(), vec![Code::MissingFunctionComment]);
    assert!(report.violations[0].suppressed);
    assert_eq!(report.violations[0].severity, Severity::Info);
}

#[test]
/// A bare name suppresses the code in every rule family.
fn test_bare_name_suppress() {
    let mut engine = LintEngine::new(PlumbConfig::default());
    engine.suppress("Missing");
    let src = "<?php\nclass A\n{\n    public $a;\n}\nfunction f()\n{\n}\n";
    let report = engine.lint_source("a.php", src);
    assert_eq!(report.violations.len(), 2);
    assert!(report.violations.iter().all(|v| v.suppressed));

    let result = engine.summarize("check", &[report]);
    assert_eq!(result.status, "ok");
    assert_eq!(result.info.suppressed, 2);
}

#[test]
/// Suppression never changes what a violation is called.
fn test_suppressed_keeps_code_and_message() {
    let mut engine = LintEngine::new(PlumbConfig::default());
    engine.suppress("FunctionComment.Missing");
    let v = &engine.lint_source("a.php", UNDOCUMENTED).violations[0];
    assert_eq!(v.code.qualified(), "FunctionComment.Missing");
    assert_eq!(v.message, "Missing function doc comment");
    assert_eq!(
        v.suppress_hint.as_deref(),
        Some("Suppressed FunctionComment.Missing via --suppress flag")
    );
}

#[test]
fn test_unrelated_suppress_has_no_effect() {
    let mut engine = LintEngine::new(PlumbConfig::default());
    engine.suppress("VariableComment.Missing");
    let report = engine.lint_source("a.php", UNDOCUMENTED);
    assert!(!report.violations[0].suppressed);
    assert_eq!(engine.summarize("check", &[report]).status, "error");
}
