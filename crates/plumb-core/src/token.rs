use serde::{Deserialize, Serialize};

use crate::links::{resolve_links, TokenLinks};

/// Token categories produced by the lexer.
///
/// Doc comments are split into their structural parts so validators can reason
/// about stars, padding, tags, and free text independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    DocCommentOpen,
    DocCommentClose,
    DocCommentStar,
    DocCommentWhitespace,
    DocCommentString,
    DocCommentTag,
    OpenTag,
    CloseTag,
    Whitespace,
    Comment,
    Variable,
    Identifier,
    Number,
    StringLiteral,
    Function,
    Closure,
    Class,
    Interface,
    Trait,
    Return,
    Yield,
    Semicolon,
    Comma,
    Ellipsis,
    Ampersand,
    Equals,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenSquare,
    CloseSquare,
    Other,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::DocCommentOpen => "doc_comment_open",
            TokenKind::DocCommentClose => "doc_comment_close",
            TokenKind::DocCommentStar => "doc_comment_star",
            TokenKind::DocCommentWhitespace => "doc_comment_whitespace",
            TokenKind::DocCommentString => "doc_comment_string",
            TokenKind::DocCommentTag => "doc_comment_tag",
            TokenKind::OpenTag => "open_tag",
            TokenKind::CloseTag => "close_tag",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Variable => "variable",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::Function => "function",
            TokenKind::Closure => "closure",
            TokenKind::Class => "class",
            TokenKind::Interface => "interface",
            TokenKind::Trait => "trait",
            TokenKind::Return => "return",
            TokenKind::Yield => "yield",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Comma => "comma",
            TokenKind::Ellipsis => "ellipsis",
            TokenKind::Ampersand => "ampersand",
            TokenKind::Equals => "equals",
            TokenKind::OpenParen => "open_paren",
            TokenKind::CloseParen => "close_paren",
            TokenKind::OpenCurly => "open_curly",
            TokenKind::CloseCurly => "close_curly",
            TokenKind::OpenSquare => "open_square",
            TokenKind::CloseSquare => "close_square",
            TokenKind::Other => "other",
        }
    }

    /// True for every token that lives between `/**` and `*/`, markers included.
    pub fn is_doc_comment(&self) -> bool {
        matches!(
            self,
            TokenKind::DocCommentOpen
                | TokenKind::DocCommentClose
                | TokenKind::DocCommentStar
                | TokenKind::DocCommentWhitespace
                | TokenKind::DocCommentString
                | TokenKind::DocCommentTag
        )
    }

    /// Tokens that own a `{ ... }` scope.
    pub fn is_scope_owner(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Closure
                | TokenKind::Class
                | TokenKind::Interface
                | TokenKind::Trait
        )
    }

    pub fn is_class_like(&self) -> bool {
        matches!(
            self,
            TokenKind::Class | TokenKind::Interface | TokenKind::Trait
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Doc-comment kinds that carry no content.
pub const DOC_EMPTY: &[TokenKind] = &[TokenKind::DocCommentWhitespace, TokenKind::DocCommentStar];

/// Code kinds skipped when looking for the next meaningful token.
pub const CODE_EMPTY: &[TokenKind] = &[TokenKind::Whitespace, TokenKind::Comment];

/// A single lexical unit. Lines and columns are 1-based; columns count characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Length in characters, which is what padding comparisons use.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// An ordered token sequence with resolved block boundaries.
///
/// The stream is immutable once built; fixes are computed against token
/// indices and applied to a separate text buffer by the fixer.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    links: Vec<TokenLinks>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let links = resolve_links(&tokens);
        Self { tokens, links }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Panics on an out-of-range index, like slice indexing.
    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    pub fn kind(&self, index: usize) -> TokenKind {
        self.tokens[index].kind
    }

    pub fn text(&self, index: usize) -> &str {
        &self.tokens[index].text
    }

    pub fn line(&self, index: usize) -> u32 {
        self.tokens[index].line
    }

    pub fn links(&self, index: usize) -> &TokenLinks {
        &self.links[index]
    }

    pub fn comment_closer(&self, open: usize) -> Option<usize> {
        self.links.get(open).and_then(|l| l.comment_closer)
    }

    pub fn comment_opener(&self, close: usize) -> Option<usize> {
        self.links.get(close).and_then(|l| l.comment_opener)
    }

    pub fn comment_tags(&self, open: usize) -> &[usize] {
        self.links
            .get(open)
            .map(|l| l.comment_tags.as_slice())
            .unwrap_or(&[])
    }

    /// The `{ ... }` pair owned by a function, closure, or class token.
    pub fn scope(&self, owner: usize) -> Option<(usize, usize)> {
        let links = self.links.get(owner)?;
        Some((links.scope_opener?, links.scope_closer?))
    }

    /// Owner token of the innermost `{` enclosing `index`, if that brace has one.
    pub fn enclosing_owner(&self, index: usize) -> Option<usize> {
        let curly = self.links.get(index)?.enclosing_curly?;
        self.links[curly].scope_owner
    }

    /// First token in `[start, end)` whose kind is in `kinds`.
    pub fn next_of(&self, kinds: &[TokenKind], start: usize, end: Option<usize>) -> Option<usize> {
        let end = end.unwrap_or(self.tokens.len()).min(self.tokens.len());
        (start..end).find(|&i| kinds.contains(&self.tokens[i].kind))
    }

    /// First token in `[start, end)` whose kind is NOT in `kinds`.
    pub fn next_not_of(
        &self,
        kinds: &[TokenKind],
        start: usize,
        end: Option<usize>,
    ) -> Option<usize> {
        let end = end.unwrap_or(self.tokens.len()).min(self.tokens.len());
        (start..end).find(|&i| !kinds.contains(&self.tokens[i].kind))
    }

    /// Last token in `[stop, start]` (searching backwards) whose kind is in `kinds`.
    pub fn prev_of(&self, kinds: &[TokenKind], start: usize, stop: usize) -> Option<usize> {
        if self.tokens.is_empty() || start < stop {
            return None;
        }
        let start = start.min(self.tokens.len() - 1);
        (stop..=start)
            .rev()
            .find(|&i| kinds.contains(&self.tokens[i].kind))
    }

    /// Last token in `[stop, start]` (searching backwards) whose kind is NOT in `kinds`.
    pub fn prev_not_of(&self, kinds: &[TokenKind], start: usize, stop: usize) -> Option<usize> {
        if self.tokens.is_empty() || start < stop {
            return None;
        }
        let start = start.min(self.tokens.len() - 1);
        (stop..=start)
            .rev()
            .find(|&i| !kinds.contains(&self.tokens[i].kind))
    }

    /// Reassemble the original source text.
    pub fn source(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}
