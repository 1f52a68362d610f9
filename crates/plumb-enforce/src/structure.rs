//! Block layout checks: open/close lines, descriptions, blank-line spacing,
//! tag grouping and ordering.
//!
//! Checks run in a fixed order. `Empty` and `MissingShort` end the block's
//! structure checks; everything else is reported independently.

use std::collections::HashSet;

use plumb_core::token::{TokenKind, DOC_EMPTY};

use crate::align::{self, star_indent};
use crate::codes::Code;
use crate::context::Context;
use crate::findings::Findings;
use crate::fixer::Changeset;
use crate::groups::{param_group, partition, PARAM_TAG};
use crate::locator::CommentBlock;
use crate::prose::starts_lowercase;

pub fn check(ctx: &Context, block: &CommentBlock, out: &mut Findings) {
    let stream = ctx.stream;
    let (open, close) = (block.open, block.close);
    let indent = star_indent(stream, open);

    let Some(short) = stream.next_not_of(DOC_EMPTY, open + 1, Some(close)) else {
        out.report(Code::Empty, open, "Doc comment is empty");
        return;
    };

    if stream.line(short) == stream.line(open) {
        let mut fix = Changeset::new();
        let lead = format!("{}{}* ", ctx.eol, indent);
        if short > open + 1 && stream.kind(open + 1) == TokenKind::DocCommentWhitespace {
            fix.replace(open + 1, lead);
        } else {
            fix.add_content(open, lead);
        }
        for i in short + 1..=close {
            if matches!(
                stream.kind(i),
                TokenKind::DocCommentStar | TokenKind::DocCommentClose
            ) {
                align::set_line_indent(&mut fix, stream, i, &indent);
            }
        }
        out.report_fixable(
            Code::ContentAfterOpen,
            open,
            "The open comment tag must be the only content on the line",
            fix,
        );
    }

    let last = stream
        .prev_not_of(DOC_EMPTY, close - 1, open)
        .unwrap_or(open);
    if last != open && stream.line(last) == stream.line(close) {
        let mut fix = Changeset::new();
        let before = close - 1;
        if before > last && stream.kind(before) == TokenKind::DocCommentWhitespace {
            fix.replace(before, format!("{}{}", ctx.eol, indent));
        } else {
            fix.add_content_before(close, format!("{}{}", ctx.eol, indent));
        }
        out.report_fixable(
            Code::ContentBeforeClose,
            close,
            "The close comment tag must be the only content on the line",
            fix,
        );
    }

    if stream.line(last) + 1 < stream.line(close) {
        let mut fix = Changeset::new();
        for i in last + 1..close {
            if stream.line(i + 1) == stream.line(close) {
                break;
            }
            fix.clear(i);
        }
        out.report_fixable(
            Code::SpacingAfter,
            last,
            "Additional blank lines found at end of doc comment",
            fix,
        );
    }

    if stream.kind(short) != TokenKind::DocCommentString {
        out.report(Code::MissingShort, short, "Missing short description in doc comment");
        return;
    }

    if stream.line(short) > stream.line(open) + 1 {
        let mut fix = Changeset::new();
        for i in open + 1..short {
            if stream.line(i) != stream.line(open) && stream.line(i) < stream.line(short) {
                fix.clear(i);
            }
        }
        out.report_fixable(
            Code::SpacingBeforeShort,
            short,
            "Doc comment short description must be on the first line",
            fix,
        );
    }

    let (short_end, short_text) = description_run(ctx, short, close);
    if starts_lowercase(&short_text) {
        out.report(
            Code::ShortNotCapital,
            short,
            "Doc comment short description must start with a capital letter",
        );
    }

    if let Some(long) = stream
        .next_not_of(DOC_EMPTY, short_end + 1, Some(close))
        .filter(|&i| stream.kind(i) == TokenKind::DocCommentString)
    {
        if stream.line(long) != stream.line(short_end) + 2 {
            let mut fix = Changeset::new();
            for i in short_end + 1..long {
                let line = stream.line(i);
                if line > stream.line(short_end) && line + 1 < stream.line(long) {
                    fix.clear(i);
                }
            }
            out.report_fixable(
                Code::SpacingBetween,
                long,
                "There must be exactly one blank line between descriptions in a doc comment",
                fix,
            );
        }
        if starts_lowercase(stream.text(long)) {
            out.report(
                Code::LongNotCapital,
                long,
                "Doc comment long description must start with a capital letter",
            );
        }
    }

    let Some(first_tag) = block.tags.first() else {
        return;
    };
    if let Some(prev) = stream.prev_not_of(DOC_EMPTY, first_tag.position - 1, open) {
        if stream.line(first_tag.position) != stream.line(prev) + 2 {
            out.report_fixable(
                Code::SpacingBeforeTags,
                first_tag.position,
                "There must be exactly one blank line before the tags in a doc comment",
                single_blank_line(ctx, &indent, prev, first_tag.position),
            );
        }
    }

    check_tags(ctx, block, &indent, out);
}

fn check_tags(ctx: &Context, block: &CommentBlock, indent: &str, out: &mut Findings) {
    let stream = ctx.stream;
    let groups = partition(stream, block);
    let params_at = param_group(&groups);

    for (index, group) in groups.iter().enumerate() {
        if Some(index) == params_at {
            continue;
        }
        for tag in group.members.iter().filter(|t| t.name == PARAM_TAG) {
            out.report(
                Code::ParamGroup,
                tag.position,
                "Parameter tags must be grouped together in a doc comment",
            );
        }
    }

    for (index, group) in groups.iter().enumerate() {
        if let (Some(last), Some(next)) = (
            group.last(),
            groups.get(index + 1).and_then(|g| g.first()),
        ) {
            let prev = stream
                .prev_of(
                    &[TokenKind::DocCommentTag, TokenKind::DocCommentString],
                    next.position - 1,
                    block.open,
                )
                .unwrap_or(last.position);
            if stream.line(next.position) != stream.line(prev) + 2 {
                out.report_fixable(
                    Code::SpacingAfterTagGroup,
                    last.position,
                    "There must be a single blank line after a tag group",
                    single_blank_line(ctx, indent, prev, next.position),
                );
            }
        }
        align::check_group(ctx, group, out);
    }

    if let Some(first) = params_at
        .filter(|&i| i != 0)
        .and_then(|i| groups[i].first())
    {
        out.report(
            Code::ParamNotFirst,
            first.position,
            "Parameter tags must be defined first in a doc comment",
        );
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut previous: Option<&str> = None;
    for tag in &block.tags {
        let name = tag.name.as_str();
        if seen.contains(name) && previous != Some(name) {
            out.report(
                Code::TagsNotGrouped,
                tag.position,
                format!("Tags must be grouped together in a doc comment; {} found out of order", name),
            );
        }
        seen.insert(name);
        previous = Some(name);
    }
}

/// Last string of the description starting at `first` (consecutive lines
/// only) and the description's text.
fn description_run(ctx: &Context, first: usize, close: usize) -> (usize, String) {
    let stream = ctx.stream;
    let mut end = first;
    let mut text = stream.text(first).to_string();
    while let Some(next) = stream.next_not_of(DOC_EMPTY, end + 1, Some(close)) {
        if stream.kind(next) != TokenKind::DocCommentString
            || stream.line(next) != stream.line(end) + 1
        {
            break;
        }
        text.push(' ');
        text.push_str(stream.text(next));
        end = next;
    }
    (end, text)
}

/// Rewrite everything between `prev` and the line of `next` as exactly one
/// blank comment line.
fn single_blank_line(ctx: &Context, indent: &str, prev: usize, next: usize) -> Changeset {
    let stream = ctx.stream;
    let mut fix = Changeset::new();
    for i in prev + 1..next {
        if stream.line(i) < stream.line(next) {
            fix.clear(i);
        }
    }
    fix.add_content(prev, format!("{eol}{indent}*{eol}", eol = ctx.eol));
    fix
}
