// Fixing its own output again changes nothing.

use plumb_core::config::PlumbConfig;
use plumb_enforce::engine::LintEngine;
use proptest::prelude::*;

use super::common::fixture;

fn engine() -> LintEngine {
    LintEngine::new(PlumbConfig::default())
}

#[test]
fn test_fixture_fix_is_idempotent() {
    let engine = engine();
    let first = engine.fix_source("messy.php", &fixture("messy.php"));
    let second = engine.fix_source("messy.php", &first.source);
    assert_eq!(second.source, first.source);
    assert_eq!(second.applied, 0);
}

const TYPES: &[&str] = &["int", "integer", "bool", "boolean", "string", "double", "float"];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_param_blocks_settle(
        types in prop::collection::vec(prop::sample::select(TYPES), 1..4),
        type_pads in prop::collection::vec(1usize..5, 4),
        var_pads in prop::collection::vec(1usize..5, 4),
    ) {
        let tags: String = types
            .iter()
            .enumerate()
            .map(|(i, ty)| {
                format!(
                    " * @param {}{}$v{}{}Value.\n",
                    ty,
                    " ".repeat(type_pads[i]),
                    i,
                    " ".repeat(var_pads[i])
                )
            })
            .collect();
        let params: Vec<String> = (0..types.len()).map(|i| format!("$v{}", i)).collect();
        let src = format!(
            "<?php\n/**\n * Doc.\n *\n{} *\n * @return void\n */\nfunction f({})\n{{\n}}\n",
            tags,
            params.join(", ")
        );

        let engine = engine();
        let first = engine.fix_source("p.php", &src);
        prop_assert!(first.converged);
        prop_assert_eq!(first.report.fixable(), 0);

        let second = engine.fix_source("p.php", &first.source);
        prop_assert_eq!(second.applied, 0);
        prop_assert_eq!(&second.source, &first.source);
    }
}

/// `(doc type, declared hint)` pairs that agree with each other.
const HINTED: &[(&str, &str)] = &[
    ("int", "int"),
    ("bool", "bool"),
    ("string", "string"),
    ("float", "float"),
    ("int[]", "array"),
    ("callable", "callable"),
    ("Request", "Request"),
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_positional_params_are_clean(
        pairs in prop::collection::vec(prop::sample::select(HINTED), 1..6),
    ) {
        let width = pairs.iter().map(|(ty, _)| ty.len()).max().unwrap_or(0);
        let tags: String = pairs
            .iter()
            .enumerate()
            .map(|(i, (ty, _))| {
                format!(" * @param {}{}$v{} Value {}.\n", ty, " ".repeat(width - ty.len() + 1), i, i)
            })
            .collect();
        let params: Vec<String> = pairs
            .iter()
            .enumerate()
            .map(|(i, (_, hint))| format!("{} $v{}", hint, i))
            .collect();
        let src = format!(
            "<?php\n/**\n * Doc.\n *\n{} *\n * @return void\n */\nfunction f({})\n{{\n}}\n",
            tags,
            params.join(", ")
        );

        let report = engine().lint_source("p.php", &src);
        prop_assert!(report.violations.is_empty(), "{:?}\n{}", report.codes(), src);
    }
}
