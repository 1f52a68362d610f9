//! Source text to [`TokenStream`].
//!
//! A small PHP-flavoured scanner: it understands enough of the surface syntax
//! (comments, strings, variables, keywords, brackets) to locate doc comments
//! and the declarations they document. Doc comments are split into open/close
//! markers, stars, whitespace, tags, and strings, one string per line.
//!
//! Heredoc/nowdoc bodies are not recognised and are lexed as ordinary code.

use crate::token::{Token, TokenKind, TokenStream};

/// Tokenize `source` and resolve all token links.
pub fn tokenize(source: &str) -> TokenStream {
    TokenStream::new(scan(source))
}

/// Tokenize without building links; used by tests that inspect raw tokens.
pub fn scan(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    scanner.run();
    classify_closures(&mut scanner.tokens);
    scanner.tokens
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Emit a token for the next `len` bytes and advance past them.
    fn emit(&mut self, kind: TokenKind, len: usize) {
        let text = &self.src[self.pos..self.pos + len];
        self.push(kind, text);
        self.pos += len;
    }

    /// Record a token and advance line/column bookkeeping. Does not move `pos`.
    fn push(&mut self, kind: TokenKind, text: &str) {
        if text.is_empty() {
            return;
        }
        self.tokens
            .push(Token::new(kind, text, self.line, self.column));
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn run(&mut self) {
        while let Some(c) = self.peek() {
            let rest = self.rest();
            if c.is_whitespace() {
                let len = byte_len_while(rest, char::is_whitespace);
                self.emit(TokenKind::Whitespace, len);
            } else if rest.starts_with("/*") {
                let len = rest[2..].find("*/").map_or(rest.len(), |i| i + 4);
                let text = &rest[..len];
                if is_doc_comment(text) {
                    self.doc_comment(text);
                    self.pos += len;
                } else {
                    self.emit(TokenKind::Comment, len);
                }
            } else if rest.starts_with("//") || (c == '#' && self.peek_at(1) != Some('[')) {
                let len = rest.find('\n').unwrap_or(rest.len());
                let len = rest[..len].trim_end_matches('\r').len();
                self.emit(TokenKind::Comment, len);
            } else if rest.get(..5).is_some_and(|s| s.eq_ignore_ascii_case("<?php")) {
                self.emit(TokenKind::OpenTag, 5);
            } else if rest.starts_with("<?=") {
                self.emit(TokenKind::OpenTag, 3);
            } else if rest.starts_with("?>") {
                self.emit(TokenKind::CloseTag, 2);
            } else if c == '$' && self.peek_at(1).is_some_and(is_ident_start) {
                let len = 1 + byte_len_while(&rest[1..], is_ident_char);
                self.emit(TokenKind::Variable, len);
            } else if is_ident_start(c) {
                let len = byte_len_while(rest, is_ident_char);
                let kind = keyword_kind(&rest[..len]);
                self.emit(kind, len);
            } else if c.is_ascii_digit() {
                let len = byte_len_while(rest, |ch| ch.is_ascii_alphanumeric() || ch == '.' || ch == '_');
                self.emit(TokenKind::Number, len);
            } else if c == '\'' || c == '"' || c == '`' {
                let len = quoted_len(rest, c);
                self.emit(TokenKind::StringLiteral, len);
            } else if rest.starts_with("...") {
                self.emit(TokenKind::Ellipsis, 3);
            } else if c == '&' {
                if matches!(self.peek_at(1), Some('&') | Some('=')) {
                    self.emit(TokenKind::Other, 2);
                } else {
                    self.emit(TokenKind::Ampersand, 1);
                }
            } else if c == '=' {
                let len = if rest.starts_with("===") {
                    3
                } else if rest.starts_with("==") || rest.starts_with("=>") {
                    2
                } else {
                    1
                };
                let kind = if len == 1 {
                    TokenKind::Equals
                } else {
                    TokenKind::Other
                };
                self.emit(kind, len);
            } else {
                let kind = match c {
                    '(' => TokenKind::OpenParen,
                    ')' => TokenKind::CloseParen,
                    '{' => TokenKind::OpenCurly,
                    '}' => TokenKind::CloseCurly,
                    '[' => TokenKind::OpenSquare,
                    ']' => TokenKind::CloseSquare,
                    ';' => TokenKind::Semicolon,
                    ',' => TokenKind::Comma,
                    _ => TokenKind::Other,
                };
                self.emit(kind, c.len_utf8());
            }
        }
    }

    /// Split a complete `/** ... */` comment into its structural tokens.
    fn doc_comment(&mut self, text: &str) {
        self.push(TokenKind::DocCommentOpen, "/**");
        let body = &text[3..text.len() - 2];

        let mut first = true;
        let mut remaining = body;
        loop {
            let (line, newline, next) = match remaining.find('\n') {
                Some(i) => {
                    let line = &remaining[..i];
                    let (line, newline) = match line.strip_suffix('\r') {
                        Some(stripped) => (stripped, &remaining[i - 1..=i]),
                        None => (line, &remaining[i..=i]),
                    };
                    (line, Some(newline), Some(&remaining[i + 1..]))
                }
                None => (remaining, None, None),
            };

            self.doc_line(line, first);
            if let Some(newline) = newline {
                self.push(TokenKind::DocCommentWhitespace, newline);
            }
            first = false;

            match next {
                Some(next) => remaining = next,
                None => break,
            }
        }

        self.push(TokenKind::DocCommentClose, "*/");
    }

    fn doc_line(&mut self, line: &str, first: bool) {
        let mut rest = line;

        let indent = byte_len_while(rest, is_inline_space);
        self.push(TokenKind::DocCommentWhitespace, &rest[..indent]);
        rest = &rest[indent..];

        if !first && rest.starts_with('*') {
            self.push(TokenKind::DocCommentStar, "*");
            rest = &rest[1..];
            let gap = byte_len_while(rest, is_inline_space);
            self.push(TokenKind::DocCommentWhitespace, &rest[..gap]);
            rest = &rest[gap..];
        }

        if rest.is_empty() {
            return;
        }

        if rest.starts_with('@') && rest[1..].chars().next().is_some_and(is_tag_char) {
            let len = 1 + byte_len_while(&rest[1..], is_tag_char);
            self.push(TokenKind::DocCommentTag, &rest[..len]);
            rest = &rest[len..];
            let gap = byte_len_while(rest, is_inline_space);
            self.push(TokenKind::DocCommentWhitespace, &rest[..gap]);
            rest = &rest[gap..];
        }

        let content = rest.trim_end_matches(is_inline_space);
        self.push(TokenKind::DocCommentString, content);
        self.push(TokenKind::DocCommentWhitespace, &rest[content.len()..]);
    }
}

fn is_doc_comment(text: &str) -> bool {
    text.starts_with("/**") && text != "/**/" && text.len() >= 5 && text.ends_with("*/")
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '\\'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\\'
}

fn is_tag_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '\\' | ':')
}

fn is_inline_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn byte_len_while(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Length of a quoted literal including both quotes; runs to EOF if unterminated.
fn quoted_len(s: &str, quote: char) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return i + c.len_utf8();
        }
    }
    s.len()
}

fn keyword_kind(word: &str) -> TokenKind {
    match word.to_ascii_lowercase().as_str() {
        "function" => TokenKind::Function,
        "class" => TokenKind::Class,
        "interface" => TokenKind::Interface,
        "trait" => TokenKind::Trait,
        "return" => TokenKind::Return,
        "yield" => TokenKind::Yield,
        _ => TokenKind::Identifier,
    }
}

/// `function` directly followed by `(` (or `&(`) is an anonymous function.
/// Keywords used as member names (`Foo::class`, `$x->function`) are identifiers.
fn classify_closures(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        let is_keyword = matches!(
            tokens[i].kind,
            TokenKind::Function
                | TokenKind::Class
                | TokenKind::Interface
                | TokenKind::Trait
                | TokenKind::Return
                | TokenKind::Yield
        );
        if is_keyword && follows_member_access(tokens, i) {
            tokens[i].kind = TokenKind::Identifier;
            continue;
        }
        if tokens[i].kind != TokenKind::Function {
            continue;
        }
        let mut j = i + 1;
        while j < tokens.len()
            && matches!(
                tokens[j].kind,
                TokenKind::Whitespace | TokenKind::Comment | TokenKind::Ampersand
            )
        {
            j += 1;
        }
        if j < tokens.len() && tokens[j].kind == TokenKind::OpenParen {
            tokens[i].kind = TokenKind::Closure;
        }
    }
}

fn follows_member_access(tokens: &[Token], i: usize) -> bool {
    if i < 2 {
        return false;
    }
    let pair = (tokens[i - 2].text.as_str(), tokens[i - 1].text.as_str());
    matches!(pair, (":", ":") | ("-", ">"))
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
