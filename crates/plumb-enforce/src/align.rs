//! Padding arithmetic and indentation helpers shared by the structure and
//! parameter checks.

use plumb_core::token::{TokenKind, TokenStream};

use crate::codes::Code;
use crate::context::Context;
use crate::findings::Findings;
use crate::fixer::Changeset;
use crate::groups::TagGroup;

/// Spaces needed after an item of `len` so every item in a column of
/// `max_len`-wide items lines up one space past the widest.
pub fn required_padding(max_len: usize, len: usize) -> usize {
    max_len.saturating_sub(len) + 1
}

pub fn spaces(n: usize) -> String {
    " ".repeat(n)
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Whitespace placed before each `*` of the block opened at `open`: the
/// opener's own indentation plus one space.
pub fn star_indent(stream: &TokenStream, open: usize) -> String {
    let column = stream.token(open).column.saturating_sub(1) as usize;
    // Whitespace whose last line spans the whole column is the opener's
    // indentation; anything else (code before the opener) becomes spaces.
    let leading = open
        .checked_sub(1)
        .map(|prev| stream.token(prev))
        .filter(|t| t.kind == TokenKind::Whitespace)
        .and_then(|t| t.text.rsplit('\n').next())
        .filter(|tail| char_len(tail) == column);
    let mut indent = leading.map_or_else(|| spaces(column), str::to_string);
    indent.push(' ');
    indent
}

/// How a doc-comment token starts its line, if it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLead {
    /// Preceded on its line by this whitespace token only.
    Indented(usize),
    /// First character of its line.
    Bare,
}

pub fn line_lead(stream: &TokenStream, index: usize) -> Option<LineLead> {
    let prev = index.checked_sub(1)?;
    let prev_token = stream.token(prev);
    if prev_token.text.ends_with('\n') {
        return Some(LineLead::Bare);
    }
    if prev_token.kind == TokenKind::DocCommentWhitespace && prev_token.line == stream.line(index) {
        let before = prev.checked_sub(1)?;
        if stream.text(before).ends_with('\n') {
            return Some(LineLead::Indented(prev));
        }
    }
    None
}

/// Set the indentation in front of a line-leading token to `indent`.
pub fn set_line_indent(
    changeset: &mut Changeset,
    stream: &TokenStream,
    index: usize,
    indent: &str,
) {
    match line_lead(stream, index) {
        Some(LineLead::Indented(ws)) if stream.text(ws) != indent => {
            changeset.replace(ws, indent);
        }
        Some(LineLead::Bare) if !indent.is_empty() => {
            changeset.add_content_before(index, indent);
        }
        _ => {}
    }
}

/// Tag value alignment within one group: every valued tag's padding must be
/// `max(name length) - name length + 1`.
pub fn check_group(ctx: &Context, group: &TagGroup, out: &mut Findings) {
    let stream = ctx.stream;
    let max_len = group
        .members
        .iter()
        .map(|t| char_len(&t.name))
        .max()
        .unwrap_or(0);

    for tag in &group.members {
        if tag.value.is_none() {
            continue;
        }
        let padding_token = tag.position + 1;
        let found = char_len(stream.text(padding_token));
        let required = required_padding(max_len, char_len(&tag.name));
        if found != required {
            let mut fix = Changeset::new();
            fix.replace(padding_token, spaces(required));
            out.report_fixable(
                Code::TagValueIndent,
                padding_token,
                format!(
                    "Tag value indented incorrectly; expected {} spaces but found {}",
                    required, found
                ),
                fix,
            );
        }
    }
}
