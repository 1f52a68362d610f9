// Function comment location, @param, @return, and @throws checks.

use plumb_enforce::codes::Code;

use super::common::lint_codes;

fn documented(tags: &str, signature: &str, body: &str) -> String {
    format!(
        "<?php\n/**\n * Does work.\n *\n{}\n */\nfunction {}\n{{\n{}\n}}\n",
        tags, signature, body
    )
}

#[test]
fn test_missing_and_wrong_style() {
    assert_eq!(
        lint_codes("<?php\nfunction f()\n{\n}\n"),
        vec![Code::MissingFunctionComment]
    );
    assert_eq!(
        lint_codes("<?php\n/* Does work. */\nfunction f()\n{\n}\n"),
        vec![Code::FunctionWrongStyle]
    );
}

#[test]
fn test_void_return_with_value() {
    let src = documented(" * @return void", "f()", "    return 5;");
    assert_eq!(lint_codes(&src), vec![Code::InvalidReturnVoid]);
}

#[test]
fn test_missing_return_tag() {
    let src = documented(" * @param int $a The value.", "f(int $a)", "    return $a;");
    assert_eq!(lint_codes(&src), vec![Code::MissingReturn]);
}

#[test]
fn test_undocumented_parameter() {
    let src = documented(
        " * @param int $a The value.\n *\n * @return int",
        "f(int $a, int $b)",
        "    return $a + $b;",
    );
    assert_eq!(lint_codes(&src), vec![Code::MissingParamTag]);
}

#[test]
fn test_parameter_name_mismatch() {
    let src = documented(
        " * @param int $A The value.\n *\n * @return int",
        "f(int $a)",
        "    return $a;",
    );
    assert_eq!(lint_codes(&src), vec![Code::ParamNameNoCaseMatch]);

    let src = documented(
        " * @param int $b The value.\n *\n * @return int",
        "f(int $a)",
        "    return $a;",
    );
    assert_eq!(lint_codes(&src), vec![Code::ParamNameNoMatch]);
}

#[test]
fn test_extra_parameter_comment() {
    let src = documented(
        " * @param int $a The value.\n * @param int $b Extra.\n *\n * @return int",
        "f(int $a)",
        "    return $a;",
    );
    assert_eq!(lint_codes(&src), vec![Code::ExtraParamComment]);
}

#[test]
fn test_parameter_comment_prose() {
    let src = documented(
        " * @param int $a the value\n *\n * @return int",
        "f(int $a)",
        "    return $a;",
    );
    assert_eq!(
        lint_codes(&src),
        vec![Code::ParamCommentNotCapital, Code::ParamCommentFullStop]
    );
}

#[test]
fn test_throws_prose() {
    let src = documented(
        " * @return void\n *\n * @throws RuntimeException when it fails",
        "f()",
        "    throw new RuntimeException('x');",
    );
    assert_eq!(
        lint_codes(&src),
        vec![Code::ThrowsNotCapital, Code::ThrowsNoFullStop]
    );
}

#[test]
/// Abstract and interface methods have no body to check returns against.
fn test_bodyless_method_skips_exit_checks() {
    let src = "<?php
interface Shape
{
    /**
     * Area of the shape.
     *
     * @return float
     */
    public function area();
}
";
    assert!(lint_codes(src).is_empty());
}
