// Member variable comments and their @var tag.

use plumb_enforce::codes::Code;

use super::common::lint_codes;

fn class(members: &str) -> String {
    format!("<?php\nclass Box\n{{\n{}\n}}\n", members)
}

#[test]
fn test_documented_property() {
    let src = class("    /**\n     * Width.\n     *\n     * @var float\n     */\n    protected $width;");
    assert!(lint_codes(&src).is_empty());
}

#[test]
fn test_missing_property_comment() {
    assert_eq!(
        lint_codes(&class("    public $width;")),
        vec![Code::MissingVariableComment]
    );
}

#[test]
fn test_locals_are_not_members() {
    let src = class(
        "    /**\n     * Resets.\n     *\n     * @return void\n     */\n    public function reset()\n    {\n        $width = 0;\n    }",
    );
    assert!(lint_codes(&src).is_empty());
}

#[test]
fn test_var_rules() {
    let src = class("    /**\n     * Width.\n     */\n    public $width;");
    assert_eq!(lint_codes(&src), vec![Code::MissingVar]);

    let src = class("    /**\n     * Width.\n     *\n     * @var double\n     */\n    public $width;");
    assert_eq!(lint_codes(&src), vec![Code::IncorrectVarType]);
}
