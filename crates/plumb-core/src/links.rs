//! Token pairing resolved once per stream.
//!
//! Mirrors what a full tokenizer would pre-compute: doc comment opener/closer
//! and tag positions, parenthesis pairs, brace pairs with the token that owns
//! them, and the innermost brace enclosing each token.

use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenLinks {
    pub comment_opener: Option<usize>,
    pub comment_closer: Option<usize>,
    /// Positions of `@tag` tokens, set on the opener only.
    pub comment_tags: Vec<usize>,
    /// Set on scope owners (function, closure, class) and on braces.
    pub scope_opener: Option<usize>,
    pub scope_closer: Option<usize>,
    /// Set on `{` tokens.
    pub scope_owner: Option<usize>,
    pub paren_opener: Option<usize>,
    pub paren_closer: Option<usize>,
    /// Innermost unclosed `{` before this token.
    pub enclosing_curly: Option<usize>,
}

pub(crate) fn resolve_links(tokens: &[Token]) -> Vec<TokenLinks> {
    let mut links = vec![TokenLinks::default(); tokens.len()];

    let mut comment_open: Option<usize> = None;
    let mut parens: Vec<usize> = Vec::new();
    let mut curlies: Vec<usize> = Vec::new();
    // Owner waiting for its `{`, with the paren depth it was seen at.
    let mut pending_owner: Option<(usize, usize)> = None;

    for (i, token) in tokens.iter().enumerate() {
        links[i].enclosing_curly = curlies.last().copied();

        match token.kind {
            TokenKind::DocCommentOpen => comment_open = Some(i),
            TokenKind::DocCommentTag => {
                if let Some(open) = comment_open {
                    links[open].comment_tags.push(i);
                }
            }
            TokenKind::DocCommentClose => {
                if let Some(open) = comment_open.take() {
                    links[open].comment_closer = Some(i);
                    links[i].comment_opener = Some(open);
                }
            }
            TokenKind::OpenParen => parens.push(i),
            TokenKind::CloseParen => {
                if let Some(open) = parens.pop() {
                    links[open].paren_closer = Some(i);
                    links[open].paren_opener = Some(open);
                    links[i].paren_opener = Some(open);
                    links[i].paren_closer = Some(i);
                }
            }
            kind if kind.is_scope_owner() => {
                pending_owner = Some((i, parens.len()));
            }
            TokenKind::Semicolon => {
                // Abstract and interface methods end without a body.
                if matches!(pending_owner, Some((_, depth)) if depth == parens.len()) {
                    pending_owner = None;
                }
            }
            TokenKind::OpenCurly => {
                if let Some((owner, depth)) = pending_owner {
                    if depth == parens.len() {
                        links[i].scope_owner = Some(owner);
                        links[owner].scope_opener = Some(i);
                        pending_owner = None;
                    }
                }
                curlies.push(i);
            }
            TokenKind::CloseCurly => {
                if let Some(open) = curlies.pop() {
                    links[open].scope_opener = Some(open);
                    links[open].scope_closer = Some(i);
                    links[i].scope_opener = Some(open);
                    links[i].scope_closer = Some(i);
                    if let Some(owner) = links[open].scope_owner {
                        links[i].scope_owner = Some(owner);
                        links[owner].scope_closer = Some(i);
                    }
                }
            }
            _ => {}
        }
    }

    links
}
