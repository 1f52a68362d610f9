// Multi-pass fixing over whole files.

use plumb_core::config::PlumbConfig;
use plumb_enforce::codes::Code;
use plumb_enforce::engine::LintEngine;

use super::common::fixture;
use super::common::generators::{generate_documented, generate_messy};

fn engine() -> LintEngine {
    LintEngine::new(PlumbConfig::default())
}

#[test]
fn test_messy_fixture_converges_to_clean() {
    let outcome = engine().fix_source("messy.php", &fixture("messy.php"));
    assert!(outcome.converged);
    assert!(outcome.report.violations.is_empty(), "{:?}", outcome.report.codes());
    assert_eq!(outcome.source, fixture("messy.fixed.php"));
}

#[test]
/// Spacing is recomputed after the type is normalized.
fn test_param_columns_recomputed() {
    let src = "<?php
/**
 * Scales a value.
 *
 * @param integer   $x  Description.
 *
 * @return int
 */
function scale(int $x)
{
    return $x * 2;
}
";
    let outcome = engine().fix_source("scale.php", src);
    assert!(outcome.source.contains("\n * @param int $x Description.\n"));
    assert!(outcome.converged);
}

#[test]
fn test_generated_messy_matches_generated_clean() {
    let outcome = engine().fix_source("gen.php", &generate_messy(5));
    assert!(outcome.converged);
    assert_eq!(outcome.source, generate_documented(5));
}

#[test]
/// Prose problems have no fix and survive fixing untouched.
fn test_unfixable_violations_remain() {
    let src = "<?php\n/** lower case */\n$x = 1;\n";
    let outcome = engine().fix_source("a.php", src);
    assert_eq!(outcome.source, "<?php\n/**\n * lower case\n */\n$x = 1;\n");
    assert_eq!(outcome.report.codes(), vec![Code::ShortNotCapital]);
    assert!(outcome.converged);
}

#[test]
/// Windows line endings are kept in inserted lines.
fn test_crlf_preserved() {
    let src = "<?php\r\n/** Foo.\r\n */\r\n$x = 1;\r\n";
    let outcome = engine().fix_source("a.php", src);
    assert_eq!(outcome.source, "<?php\r\n/**\r\n * Foo.\r\n */\r\n$x = 1;\r\n");
}
