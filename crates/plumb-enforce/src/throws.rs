use lazy_static::lazy_static;
use regex::Regex;

use crate::codes::Code;
use crate::context::Context;
use crate::findings::Findings;
use crate::locator::CommentBlock;
use crate::prose::{continuation_lines, ends_with_full_stop, join, starts_lowercase};

pub const THROWS_TAG: &str = "@throws";

lazy_static! {
    static ref THROWS_VALUE: Regex =
        Regex::new(r"([^\s]+)(?:\s+(.*))?").unwrap_or_else(|e| panic!("regex: {e}"));
}

/// Every `@throws` tag needs an exception type and a sentence describing when.
pub fn check(ctx: &Context, block: &CommentBlock, out: &mut Findings) {
    let stream = ctx.stream;

    for (pos, tag) in block.tags.iter().enumerate() {
        if tag.name != THROWS_TAG {
            continue;
        }
        let Some(value) = tag.value else {
            out.report(
                Code::InvalidThrows,
                tag.position,
                "Exception type and comment missing for @throws tag in function comment",
            );
            continue;
        };

        let first = THROWS_VALUE
            .captures(stream.text(value))
            .and_then(|c| c.get(2))
            .map(|m| m.as_str())
            .filter(|c| !c.trim().is_empty());
        let Some(first) = first else {
            out.report(
                Code::EmptyThrows,
                tag.position,
                "Comment missing for @throws tag in function comment",
            );
            continue;
        };

        let lines = continuation_lines(stream, tag.position + 3, block.tag_end(pos));
        let comment = join(first, stream, &lines);
        if starts_lowercase(&comment) {
            out.report(
                Code::ThrowsNotCapital,
                value,
                "@throws tag comment must start with a capital letter",
            );
        }
        if !ends_with_full_stop(&comment) {
            out.report(
                Code::ThrowsNoFullStop,
                value,
                "@throws tag comment must end with a full stop",
            );
        }
    }
}
