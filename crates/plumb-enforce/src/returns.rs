//! The `@return` tag against the declaration's exit points.

use plumb_core::decl::Declaration;

use crate::codes::Code;
use crate::context::Context;
use crate::findings::Findings;
use crate::fixer::Changeset;
use crate::locator::{CommentBlock, TagRef};
use crate::normalize::normalize_union;

pub const RETURN_TAG: &str = "@return";

/// Return types that place no requirement on the body.
const UNCHECKED_RETURNS: &[&str] = &["mixed", "never"];

pub fn check(ctx: &Context, block: &CommentBlock, decl: &Declaration, out: &mut Findings) {
    let stream = ctx.stream;

    let mut found: Option<&TagRef> = None;
    for (_, tag) in block.tags_named(RETURN_TAG) {
        if found.is_some() {
            out.report(
                Code::DuplicateReturn,
                tag.position,
                "Only 1 @return tag is allowed in a function comment",
            );
            return;
        }
        found = Some(tag);
    }

    if decl.is_special() {
        return;
    }

    let Some(tag) = found else {
        out.report(
            Code::MissingReturn,
            block.close,
            "Missing @return tag in function comment",
        );
        return;
    };

    let Some(value) = tag.value else {
        out.report(
            Code::MissingReturnType,
            tag.position,
            "Return type missing for @return tag in function comment",
        );
        return;
    };

    let content = stream.text(value);
    let (written, description) = match content.split_once(' ') {
        Some((ty, rest)) => (ty, Some(rest)),
        None => (content, None),
    };
    let return_type = normalize_union(written);
    if return_type != written && return_type != "bool" {
        let mut fix = Changeset::new();
        fix.replace(
            value,
            match description {
                Some(rest) => format!("{} {}", return_type, rest),
                None => return_type.clone(),
            },
        );
        out.report_fixable(
            Code::InvalidReturn,
            tag.position,
            format!(
                "Expected \"{}\" but found \"{}\" for function return type",
                return_type, written
            ),
            fix,
        );
    }

    if decl.body.is_none() || UNCHECKED_RETURNS.contains(&return_type.as_str()) {
        return;
    }

    let exits = decl.exit_points(stream);
    if return_type == "void" {
        if exits.iter().any(|e| e.yields_value) {
            out.report(
                Code::InvalidReturnVoid,
                tag.position,
                "Function return type is void, but function contains return statement",
            );
        }
        return;
    }

    if exits.is_empty() {
        out.report(
            Code::InvalidNoReturn,
            tag.position,
            "Function return type is not void, but function has no return statement",
        );
        return;
    }
    for exit in exits.iter().filter(|e| !e.yields_value) {
        out.report(
            Code::InvalidReturnNotVoid,
            exit.index,
            "Function return type is not void, but function is returning void here",
        );
    }
}
