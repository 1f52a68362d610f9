//! Comment block resolution.
//!
//! Turns a doc-comment open token into a [`CommentBlock`] and finds the block
//! attached to a declaration or member variable.

use plumb_core::token::{TokenKind, TokenStream};

/// Keywords that may sit between a doc comment and `function`.
const METHOD_PREFIXES: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "abstract",
    "final",
    "async",
    "export",
    "default",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub position: usize,
    pub name: String,
    /// String token holding the tag's inline value, if it has one.
    pub value: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    pub open: usize,
    pub close: usize,
    pub tags: Vec<TagRef>,
}

/// What precedes a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    Block(CommentBlock),
    /// A non-doc comment at this index.
    WrongStyle(usize),
    Missing,
}

impl CommentBlock {
    /// Returns `None` if `open` is not a resolved doc-comment opener.
    pub fn locate(stream: &TokenStream, open: usize) -> Option<Self> {
        if stream.get(open)?.kind != TokenKind::DocCommentOpen {
            return None;
        }
        let close = stream.comment_closer(open)?;
        let tags = stream
            .comment_tags(open)
            .iter()
            .map(|&position| TagRef {
                position,
                name: stream.text(position).to_string(),
                value: inline_value(stream, position, close),
            })
            .collect();
        Some(Self { open, close, tags })
    }

    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (usize, &'a TagRef)> + 'a {
        self.tags
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.name == name)
    }

    /// Exclusive end of the content belonging to the tag at `pos` in `tags`:
    /// the next tag, or the close marker.
    pub fn tag_end(&self, pos: usize) -> usize {
        self.tags
            .get(pos + 1)
            .map_or(self.close, |next| next.position)
    }

    /// Text of a tag's inline value, empty when absent.
    pub fn value_text<'s>(&self, stream: &'s TokenStream, tag: &TagRef) -> &'s str {
        tag.value.map_or("", |v| stream.text(v))
    }
}

/// `tag + 2` when it is a string on the tag's line after padding whitespace.
fn inline_value(stream: &TokenStream, tag: usize, close: usize) -> Option<usize> {
    let value = tag + 2;
    if value >= close {
        return None;
    }
    let padded = stream.kind(tag + 1) == TokenKind::DocCommentWhitespace;
    let is_string = stream.kind(value) == TokenKind::DocCommentString;
    (padded && is_string && stream.line(value) == stream.line(tag)).then_some(value)
}

/// The comment directly above the function keyword at `index`, skipping
/// whitespace and modifier keywords.
pub fn function_comment(stream: &TokenStream, index: usize) -> Attachment {
    let mut i = index;
    let prev = loop {
        let Some(prev) = i
            .checked_sub(1)
            .and_then(|p| stream.prev_not_of(&[TokenKind::Whitespace], p, 0))
        else {
            return Attachment::Missing;
        };
        let is_prefix = stream.kind(prev) == TokenKind::Identifier
            && METHOD_PREFIXES
                .iter()
                .any(|p| p.eq_ignore_ascii_case(stream.text(prev)));
        if !is_prefix {
            break prev;
        }
        i = prev;
    };

    match stream.kind(prev) {
        TokenKind::DocCommentClose => block_for_closer(stream, prev),
        TokenKind::Comment => Attachment::WrongStyle(prev),
        _ => Attachment::Missing,
    }
}

/// The comment belonging to the member variable at `index`: the nearest
/// preceding comment, provided no other variable or class sits between them.
pub fn variable_comment(stream: &TokenStream, index: usize) -> Attachment {
    let Some(comment) = index.checked_sub(1).and_then(|p| {
        stream.prev_of(&[TokenKind::Comment, TokenKind::DocCommentClose], p, 0)
    }) else {
        return Attachment::Missing;
    };

    let owner = stream.next_of(
        &[TokenKind::Variable, TokenKind::Class, TokenKind::Interface],
        comment + 1,
        None,
    );
    if owner != Some(index) {
        return Attachment::Missing;
    }

    match stream.kind(comment) {
        TokenKind::DocCommentClose => block_for_closer(stream, comment),
        _ => Attachment::WrongStyle(comment),
    }
}

fn block_for_closer(stream: &TokenStream, close: usize) -> Attachment {
    stream
        .comment_opener(close)
        .and_then(|open| CommentBlock::locate(stream, open))
        .map_or(Attachment::Missing, Attachment::Block)
}
