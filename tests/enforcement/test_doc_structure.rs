// Block layout, descriptions, and tag groups through the public engine.

use plumb_enforce::codes::Code;

use super::common::{fixture, lint_codes};

#[test]
/// A fully documented file produces no violations at all.
fn test_clean_fixture() {
    let codes = lint_codes(&fixture("clean.php"));
    assert!(codes.is_empty(), "{:?}", codes);
}

#[test]
/// Stars without a leading space are not a line-adjacency problem.
fn test_short_on_second_line_is_adjacent() {
    let codes = lint_codes("<?php\n/**\n* foo\n*/\n$x = 1;\n");
    assert_eq!(codes, vec![Code::ShortNotCapital]);
}

#[test]
fn test_content_after_open() {
    let codes = lint_codes("<?php\n/** foo\n*/\n$x = 1;\n");
    assert_eq!(codes, vec![Code::ContentAfterOpen, Code::ShortNotCapital]);
}

#[test]
fn test_empty_block() {
    assert_eq!(lint_codes("<?php\n/**\n *\n */\n$x = 1;\n"), vec![Code::Empty]);
}

#[test]
/// A block that starts with tags stops after MissingShort.
fn test_missing_short_description() {
    let codes = lint_codes("<?php\n/**\n * @see Other\n */\n$x = 1;\n");
    assert_eq!(codes, vec![Code::MissingShort]);
}

#[test]
fn test_tag_value_alignment() {
    let src = "<?php\n/**\n * Doc.\n *\n * @since 1.0\n * @see Other\n */\n$x = 1;\n";
    assert_eq!(lint_codes(src), vec![Code::TagValueIndent]);

    let src = "<?php\n/**\n * Doc.\n *\n * @since 1.0\n * @see   Other\n */\n$x = 1;\n";
    assert!(lint_codes(src).is_empty());
}

#[test]
/// Repeating a tag is only out of order when another tag interrupts it.
fn test_tags_not_grouped_is_adjacency_based() {
    let src = "<?php\n/**\n * Doc.\n *\n * @see A\n *\n * @see B\n */\n$x = 1;\n";
    assert!(lint_codes(src).is_empty());

    let src = "<?php\n/**\n * Doc.\n *\n * @see   A\n * @since 1.0\n * @see   B\n */\n$x = 1;\n";
    assert_eq!(lint_codes(src), vec![Code::TagsNotGrouped]);
}

#[test]
fn test_param_tags_must_lead() {
    let src = "<?php
/**
 * Runs.
 *
 * @return int
 *
 * @param int $a The first.
 */
function run(int $a)
{
    return $a;
}
";
    assert_eq!(lint_codes(src), vec![Code::ParamNotFirst]);
}
