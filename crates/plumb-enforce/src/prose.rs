//! Helpers for the free text of descriptions and tag comments.

use plumb_core::token::{TokenKind, TokenStream};

pub fn starts_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

pub fn ends_with_full_stop(text: &str) -> bool {
    text.ends_with('.')
}

/// A description line following a tag's own line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinuationLine {
    pub index: usize,
    /// Width of the whitespace token directly before the string, 0 if none.
    pub indent: usize,
}

/// String tokens in `[start, end)`.
pub fn continuation_lines(stream: &TokenStream, start: usize, end: usize) -> Vec<ContinuationLine> {
    (start..end.min(stream.len()))
        .filter(|&i| stream.kind(i) == TokenKind::DocCommentString)
        .map(|index| {
            let indent = index
                .checked_sub(1)
                .filter(|&p| stream.kind(p) == TokenKind::DocCommentWhitespace)
                .map_or(0, |p| stream.token(p).len());
            ContinuationLine { index, indent }
        })
        .collect()
}

/// `first` followed by every continuation line, single-space joined.
pub fn join(first: &str, stream: &TokenStream, lines: &[ContinuationLine]) -> String {
    let mut text = first.to_string();
    for line in lines {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(stream.text(line.index));
    }
    text
}
