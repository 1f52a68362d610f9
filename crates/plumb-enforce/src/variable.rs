//! Member variable comments: one `@var` tag, first, with a canonical type.

use crate::codes::Code;
use crate::context::Context;
use crate::findings::Findings;
use crate::fixer::Changeset;
use crate::locator::{variable_comment, Attachment, CommentBlock, TagRef};
use crate::normalize::normalize_union;

pub const VAR_TAG: &str = "@var";
pub const SEE_TAG: &str = "@see";

/// Locate the member's comment and check it. `member` is the variable token.
pub fn check(ctx: &Context, member: usize, out: &mut Findings) {
    let block = match variable_comment(ctx.stream, member) {
        Attachment::Block(block) => block,
        Attachment::WrongStyle(_) => {
            out.report(
                Code::VariableWrongStyle,
                member,
                "You must use \"/**\" style comments for a member variable comment",
            );
            return;
        }
        Attachment::Missing => {
            out.report(
                Code::MissingVariableComment,
                member,
                "Missing member variable doc comment",
            );
            return;
        }
    };
    check_block(ctx, &block, out);
}

fn check_block(ctx: &Context, block: &CommentBlock, out: &mut Findings) {
    let stream = ctx.stream;

    let mut var_tag: Option<&TagRef> = None;
    for tag in &block.tags {
        match tag.name.as_str() {
            VAR_TAG if var_tag.is_some() => out.report(
                Code::DuplicateVar,
                tag.position,
                "Only one @var tag is allowed in a member variable comment",
            ),
            VAR_TAG => var_tag = Some(tag),
            SEE_TAG if tag.value.is_none() => out.report(
                Code::EmptySees,
                tag.position,
                "Content missing for @see tag in member variable comment",
            ),
            SEE_TAG => {}
            other => out.report(
                Code::TagNotAllowed,
                tag.position,
                format!("{} tag is not allowed in member variable comment", other),
            ),
        }
    }

    let Some(var_tag) = var_tag else {
        out.report(
            Code::MissingVar,
            block.close,
            "Missing @var tag in member variable comment",
        );
        return;
    };

    if block.tags.first().is_some_and(|t| t.name != VAR_TAG) {
        out.report(
            Code::VarOrder,
            var_tag.position,
            "The @var tag must be the first tag in a member variable comment",
        );
    }

    let Some(value) = var_tag.value else {
        out.report(
            Code::EmptyVar,
            var_tag.position,
            "Content missing for @var tag in member variable comment",
        );
        return;
    };

    let content = stream.text(value);
    let (written, rest) = match content.split_once(' ') {
        Some((ty, rest)) => (ty, Some(rest)),
        None => (content, None),
    };
    let suggested = normalize_union(written);
    if suggested != written {
        let mut fix = Changeset::new();
        fix.replace(
            value,
            match rest {
                Some(rest) => format!("{} {}", suggested, rest),
                None => suggested.clone(),
            },
        );
        out.report_fixable(
            Code::IncorrectVarType,
            value,
            format!(
                "Expected \"{}\" but found \"{}\" for @var tag in member variable comment",
                suggested, written
            ),
            fix,
        );
    }
}
