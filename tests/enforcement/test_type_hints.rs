// Declared type hints against documented parameter types.

use plumb_core::config::PlumbConfig;
use plumb_core::version::LanguageVersion;
use plumb_enforce::codes::Code;
use plumb_enforce::engine::LintEngine;

use super::common::lint_codes;

fn function(ty: &str, hint: &str) -> String {
    format!(
        "<?php\n/**\n * Uses a value.\n *\n * @param {} $value The value.\n *\n * @return void\n */\nfunction take({}$value)\n{{\n}}\n",
        ty, hint
    )
}

fn codes_at(src: &str, version: LanguageVersion) -> Vec<Code> {
    let mut cfg = PlumbConfig::default();
    cfg.min_language_version = version;
    LintEngine::new(cfg).lint_source("test.php", src).codes()
}

#[test]
fn test_scalar_hint_gated_on_version() {
    let src = function("string", "");
    assert_eq!(lint_codes(&src), vec![Code::ScalarTypeHintMissing]);
    assert!(codes_at(&src, LanguageVersion::new(5, 6, 0)).is_empty());
}

#[test]
fn test_class_hint_missing() {
    assert_eq!(
        lint_codes(&function("\\App\\Request", "")),
        vec![Code::TypeHintMissing]
    );
    assert!(lint_codes(&function("\\App\\Request", "Request ")).is_empty());
}

#[test]
fn test_array_forms() {
    assert!(lint_codes(&function("string[]", "array ")).is_empty());
    assert_eq!(
        lint_codes(&function("string[]", "")),
        vec![Code::TypeHintMissing]
    );
}

#[test]
fn test_incorrect_hint() {
    assert_eq!(
        lint_codes(&function("int", "string ")),
        vec![Code::IncorrectTypeHint]
    );
}

#[test]
/// `mixed` has no hint to suggest, so a declared hint is unexpected.
fn test_hint_for_unhintable_type() {
    assert_eq!(
        lint_codes(&function("mixed", "string ")),
        vec![Code::InvalidTypeHint]
    );
    assert!(lint_codes(&function("mixed", "")).is_empty());
}

#[test]
fn test_object_and_iterable_gates() {
    let src = function("object", "");
    assert!(codes_at(&src, LanguageVersion::new(7, 1, 0)).is_empty());
    assert_eq!(
        codes_at(&src, LanguageVersion::new(7, 2, 0)),
        vec![Code::TypeHintMissing]
    );

    let src = function("iterable", "");
    assert!(codes_at(&src, LanguageVersion::new(7, 0, 0)).is_empty());
    assert_eq!(
        codes_at(&src, LanguageVersion::new(7, 1, 0)),
        vec![Code::TypeHintMissing]
    );
}

#[test]
fn test_union_types_skip_hint_checks() {
    assert!(lint_codes(&function("int|string", "")).is_empty());
}
