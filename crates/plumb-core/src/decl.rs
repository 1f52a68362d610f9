//! Declaration snapshots.
//!
//! Immutable views of the functions, methods, and member variables in a
//! [`TokenStream`]. Comment validators compare doc blocks against these
//! snapshots instead of walking code tokens themselves.

use serde::{Deserialize, Serialize};

use crate::token::{TokenKind, TokenStream, CODE_EMPTY};

/// Names of methods that never document a return value.
const SPECIAL_METHODS: &[&str] = &["__construct", "__destruct", "constructor"];

/// Words that may precede a parameter without being part of its type.
const PARAMETER_MODIFIERS: &[&str] = &["public", "protected", "private", "readonly"];

/// One parameter as written in the declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSignature {
    /// Variable name including the sigil, e.g. `$name`.
    pub name: String,
    /// Type hint as written (`?int`, `Foo|Bar`), empty when absent.
    pub declared_type: String,
    pub is_variadic: bool,
    pub is_by_reference: bool,
    pub has_default: bool,
}

impl ParameterSignature {
    /// Name used when matching against `@param` tags; variadics get a `...` prefix.
    pub fn comparable_name(&self) -> String {
        if self.is_variadic {
            format!("...{}", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Function,
    Method,
}

/// A named function or method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Index of the `function` keyword.
    pub index: usize,
    pub kind: DeclarationKind,
    pub name: String,
    pub parameters: Vec<ParameterSignature>,
    /// `{`/`}` indices; `None` for abstract and interface methods.
    pub body: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitKind {
    Return,
    Yield,
}

/// A `return` or `yield` inside a declaration body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitPoint {
    pub index: usize,
    pub kind: ExitKind,
    /// False for a bare `return;`.
    pub yields_value: bool,
}

/// A class-level property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberVariable {
    pub index: usize,
    pub name: String,
}

impl Declaration {
    /// Constructors and destructors.
    pub fn is_special(&self) -> bool {
        SPECIAL_METHODS.contains(&self.name.as_str())
    }

    /// Exit points of the body in source order. Exits inside closures,
    /// nested functions, and anonymous classes belong to those scopes and are skipped.
    pub fn exit_points(&self, stream: &TokenStream) -> Vec<ExitPoint> {
        let Some((open, close)) = self.body else {
            return Vec::new();
        };

        let mut exits = Vec::new();
        let mut i = open + 1;
        while i < close {
            let kind = stream.kind(i);
            if kind.is_scope_owner() {
                if let Some((_, inner_close)) = stream.scope(i) {
                    i = inner_close + 1;
                    continue;
                }
            }

            let exit_kind = match kind {
                TokenKind::Return => Some(ExitKind::Return),
                TokenKind::Yield => Some(ExitKind::Yield),
                _ => None,
            };
            if let Some(exit_kind) = exit_kind {
                let next = stream.next_not_of(CODE_EMPTY, i + 1, Some(close));
                let yields_value = next.is_some_and(|n| {
                    !matches!(stream.kind(n), TokenKind::Semicolon | TokenKind::CloseTag)
                });
                exits.push(ExitPoint {
                    index: i,
                    kind: exit_kind,
                    yields_value,
                });
            }
            i += 1;
        }
        exits
    }
}

/// Every named function and method, in source order.
pub fn collect_declarations(stream: &TokenStream) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    for index in 0..stream.len() {
        if stream.kind(index) != TokenKind::Function {
            continue;
        }

        // `use function Foo\bar;` imports, it does not declare.
        if let Some(prev) = index
            .checked_sub(1)
            .and_then(|p| stream.prev_not_of(CODE_EMPTY, p, 0))
        {
            if stream.kind(prev) == TokenKind::Identifier
                && stream.text(prev).eq_ignore_ascii_case("use")
            {
                continue;
            }
        }

        let mut name_index = stream.next_not_of(CODE_EMPTY, index + 1, None);
        if let Some(n) = name_index {
            if stream.kind(n) == TokenKind::Ampersand {
                name_index = stream.next_not_of(CODE_EMPTY, n + 1, None);
            }
        }
        let Some(name_index) = name_index else {
            continue;
        };
        if stream.kind(name_index) != TokenKind::Identifier {
            continue;
        }

        let kind = match stream.enclosing_owner(index) {
            Some(owner) if stream.kind(owner).is_class_like() => DeclarationKind::Method,
            _ => DeclarationKind::Function,
        };

        declarations.push(Declaration {
            index,
            kind,
            name: stream.text(name_index).to_string(),
            parameters: method_parameters(stream, index),
            body: stream.scope(index),
        });
    }

    declarations
}

/// Parameters of the function whose keyword is at `function_index`.
pub fn method_parameters(stream: &TokenStream, function_index: usize) -> Vec<ParameterSignature> {
    let Some(open) = stream.next_of(&[TokenKind::OpenParen], function_index + 1, None) else {
        return Vec::new();
    };
    let Some(close) = stream.links(open).paren_closer else {
        return Vec::new();
    };

    let mut params = Vec::new();
    let mut current = ParamBuilder::default();
    let mut depth = 0usize;

    for i in open + 1..close {
        let kind = stream.kind(i);
        match kind {
            TokenKind::OpenParen | TokenKind::OpenSquare | TokenKind::OpenCurly => {
                depth += 1;
                continue;
            }
            TokenKind::CloseParen | TokenKind::CloseSquare | TokenKind::CloseCurly => {
                depth = depth.saturating_sub(1);
                continue;
            }
            _ => {}
        }
        if depth > 0 {
            continue;
        }

        match kind {
            TokenKind::Comma => {
                params.extend(current.finish());
                current = ParamBuilder::default();
            }
            _ if current.has_default => {}
            TokenKind::Equals => current.has_default = true,
            TokenKind::Ellipsis => current.is_variadic = true,
            TokenKind::Variable => {
                if current.name.is_none() {
                    current.name = Some(stream.text(i).to_string());
                }
            }
            TokenKind::Ampersand => {
                let next = stream.next_not_of(CODE_EMPTY, i + 1, Some(close));
                let marks_reference = next.is_some_and(|n| {
                    matches!(stream.kind(n), TokenKind::Variable | TokenKind::Ellipsis)
                });
                if marks_reference {
                    current.is_by_reference = true;
                } else if current.name.is_none() {
                    current.declared_type.push('&');
                }
            }
            TokenKind::Identifier if current.name.is_none() => {
                let word = stream.text(i);
                if !PARAMETER_MODIFIERS
                    .iter()
                    .any(|m| m.eq_ignore_ascii_case(word))
                {
                    current.declared_type.push_str(word);
                }
            }
            TokenKind::Other if current.name.is_none() => {
                let text = stream.text(i);
                if text == "?" || text == "|" {
                    current.declared_type.push_str(text);
                }
            }
            _ => {}
        }
    }
    params.extend(current.finish());

    params
}

#[derive(Default)]
struct ParamBuilder {
    name: Option<String>,
    declared_type: String,
    is_variadic: bool,
    is_by_reference: bool,
    has_default: bool,
}

impl ParamBuilder {
    fn finish(self) -> Option<ParameterSignature> {
        Some(ParameterSignature {
            name: self.name?,
            declared_type: self.declared_type,
            is_variadic: self.is_variadic,
            is_by_reference: self.is_by_reference,
            has_default: self.has_default,
        })
    }
}

/// Property declarations directly inside a class, interface, or trait body.
pub fn collect_member_variables(stream: &TokenStream) -> Vec<MemberVariable> {
    let mut members = Vec::new();

    for index in 0..stream.len() {
        if stream.kind(index) != TokenKind::Variable {
            continue;
        }
        let in_class_body = stream
            .enclosing_owner(index)
            .is_some_and(|owner| stream.kind(owner).is_class_like());
        if !in_class_body || !is_property_position(stream, index) {
            continue;
        }
        members.push(MemberVariable {
            index,
            name: stream.text(index).to_string(),
        });
    }

    members
}

/// Only modifiers, type words, and comments may sit between the previous
/// statement boundary and a property name.
fn is_property_position(stream: &TokenStream, index: usize) -> bool {
    let mut i = index;
    while i > 0 {
        i -= 1;
        let token = stream.token(i);
        match token.kind {
            TokenKind::Semicolon | TokenKind::OpenCurly | TokenKind::CloseCurly => return true,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::Identifier => {}
            kind if kind.is_doc_comment() => {}
            TokenKind::Other if token.text == "?" || token.text == "|" => {}
            _ => return false,
        }
    }
    false
}
