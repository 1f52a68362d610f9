//! `@param` tags against the declaration's real parameter list.

use lazy_static::lazy_static;
use plumb_core::decl::{Declaration, ParameterSignature};
use plumb_core::version::LanguageVersion;
use regex::Regex;

use crate::align::{char_len, required_padding, spaces};
use crate::codes::Code;
use crate::context::Context;
use crate::findings::Findings;
use crate::fixer::Changeset;
use crate::groups::PARAM_TAG;
use crate::locator::{CommentBlock, TagRef};
use crate::normalize::{is_builtin, is_scalar, normalize_union, split_union};
use crate::prose::{continuation_lines, ends_with_full_stop, join, starts_lowercase};

lazy_static! {
    /// `<type> <sigil-name> <description>`; every part after the type is optional.
    static ref PARAM_VALUE: Regex =
        Regex::new(r"([^$&.]+)(?:((?:\.\.\.)?(?:\$|&)[^\s]+)(?:(\s+)(.*))?)?")
            .unwrap_or_else(|e| panic!("regex: {e}"));
}

/// One description line: the value token's own text or a continuation string.
#[derive(Debug, Clone)]
struct CommentLine {
    index: usize,
    text: String,
    indent: usize,
}

#[derive(Debug, Clone, Default)]
struct ParamTag {
    tag: usize,
    value: Option<usize>,
    text: String,
    ty: String,
    /// Byte offset of `ty` within `text`.
    ty_start: usize,
    type_space: usize,
    var: String,
    var_space: usize,
    comment: String,
    lines: Vec<CommentLine>,
}

impl ParamTag {
    fn first_line(&self) -> &str {
        self.lines.first().map_or("", |l| l.text.as_str())
    }

    /// Rebuild the value token text with the given paddings.
    fn render(&self, ty: &str, type_space: usize, var_space: usize) -> String {
        format!(
            "{}{}{}{}{}",
            ty,
            spaces(type_space),
            self.var,
            spaces(var_space),
            self.first_line()
        )
    }

    /// Shift continuation lines by `delta` columns, never below one space.
    fn reindent(&self, fix: &mut Changeset, delta: isize) {
        for line in self.lines.iter().skip(1).filter(|l| l.indent > 0) {
            let indent = (line.indent as isize + delta).max(1) as usize;
            fix.replace(line.index - 1, spaces(indent));
        }
    }

    /// The value text with only the type replaced.
    fn with_type(&self, ty: &str) -> String {
        let end = self.ty_start + self.ty.len();
        format!("{}{}{}", &self.text[..self.ty_start], ty, &self.text[end..])
    }

    fn comparable_var(&self) -> &str {
        self.var.strip_prefix('&').unwrap_or(&self.var)
    }
}

pub fn check(ctx: &Context, block: &CommentBlock, decl: &Declaration, out: &mut Findings) {
    let params: Vec<ParamTag> = block
        .tags
        .iter()
        .enumerate()
        .filter(|(_, t)| t.name == PARAM_TAG)
        .map(|(pos, tag)| parse(ctx, block, pos, tag, out))
        .collect();

    let max_type = params.iter().map(|p| char_len(&p.ty)).max().unwrap_or(0);
    let max_var = params.iter().map(|p| char_len(&p.var)).max().unwrap_or(0);
    let mut documented: Vec<&str> = Vec::new();

    for (pos, param) in params.iter().enumerate() {
        if param.ty.is_empty() {
            continue;
        }
        let real = decl.parameters.get(pos);
        check_type(ctx, decl, param, real, out);

        if param.var.is_empty() {
            continue;
        }
        documented.push(param.comparable_var());
        let Some(value) = param.value else {
            continue;
        };

        let type_padding = required_padding(max_type, char_len(&param.ty));
        if param.type_space != type_padding {
            let mut fix = Changeset::new();
            fix.replace(value, param.render(&param.ty, type_padding, param.var_space));
            param.reindent(&mut fix, type_padding as isize - param.type_space as isize);
            out.report_fixable(
                Code::SpacingAfterParamType,
                param.tag,
                format!(
                    "Expected {} spaces after parameter type; {} found",
                    type_padding, param.type_space
                ),
                fix,
            );
        }

        match real {
            Some(real) => check_name(param, real, out),
            None if !param.var.ends_with(",...") => {
                out.report(Code::ExtraParamComment, param.tag, "Superfluous parameter comment");
            }
            None => {}
        }

        if param.comment.is_empty() {
            continue;
        }

        let var_padding = required_padding(max_var, char_len(&param.var));
        if param.var_space != var_padding {
            let mut fix = Changeset::new();
            fix.replace(value, param.render(&param.ty, param.type_space, var_padding));
            param.reindent(&mut fix, var_padding as isize - param.var_space as isize);
            out.report_fixable(
                Code::SpacingAfterParamName,
                param.tag,
                format!(
                    "Expected {} spaces after parameter name; {} found",
                    var_padding, param.var_space
                ),
                fix,
            );
        }

        if starts_lowercase(&param.comment) {
            out.report(
                Code::ParamCommentNotCapital,
                param.tag,
                "Parameter comment must start with a capital letter",
            );
        }
        if !ends_with_full_stop(&param.comment) {
            out.report(
                Code::ParamCommentFullStop,
                param.tag,
                "Parameter comment must end with a full stop",
            );
        }
    }

    for real in &decl.parameters {
        let name = real.comparable_name();
        if !documented.contains(&name.as_str()) {
            out.report(
                Code::MissingParamTag,
                block.open,
                format!("Doc comment for parameter \"{}\" missing", name),
            );
        }
    }
}

/// Split a tag's value into type, name and description, reporting what is missing.
fn parse(ctx: &Context, block: &CommentBlock, pos: usize, tag: &TagRef, out: &mut Findings) -> ParamTag {
    let stream = ctx.stream;
    let mut param = ParamTag {
        tag: tag.position,
        value: tag.value,
        ..ParamTag::default()
    };

    let text = block.value_text(stream, tag);
    param.text = text.to_string();
    let captures = tag
        .value
        .filter(|_| !text.starts_with(['$', '&', '.']))
        .and_then(|_| PARAM_VALUE.captures(text));
    let Some(captures) = captures else {
        out.report(Code::MissingParamType, tag.position, "Missing parameter type");
        return param;
    };

    if let Some(raw) = captures.get(1) {
        param.ty = raw.as_str().trim().to_string();
        param.ty_start = raw.start() + raw.as_str().len() - raw.as_str().trim_start().len();
        param.type_space = char_len(raw.as_str()) - char_len(&param.ty);
    }

    let Some(var) = captures.get(2) else {
        out.report(Code::MissingParamName, tag.position, "Missing parameter name");
        return param;
    };
    param.var = var.as_str().to_string();

    match (captures.get(3), captures.get(4)) {
        (Some(gap), Some(comment)) if !comment.as_str().is_empty() => {
            param.var_space = char_len(gap.as_str());
            param.lines.push(CommentLine {
                index: tag.position + 2,
                text: comment.as_str().to_string(),
                indent: param.var_space,
            });
            let continuation = continuation_lines(stream, tag.position + 3, block.tag_end(pos));
            param.comment = join(comment.as_str(), stream, &continuation);
            param.lines.extend(continuation.into_iter().map(|line| CommentLine {
                index: line.index,
                text: stream.text(line.index).to_string(),
                indent: line.indent,
            }));
        }
        _ => {
            out.report(Code::MissingParamComment, tag.position, "Missing parameter comment");
        }
    }

    param
}

fn check_name(param: &ParamTag, real: &ParameterSignature, out: &mut Findings) {
    let expected = real.comparable_name();
    let written = param.comparable_var();
    if written == expected {
        return;
    }
    let (code, qualifier) = if written.to_lowercase() == expected.to_lowercase() {
        (Code::ParamNameNoCaseMatch, "case of ")
    } else {
        (Code::ParamNameNoMatch, "")
    };
    out.report(
        code,
        param.tag,
        format!(
            "Doc comment for parameter {} does not match {}actual variable name {}",
            param.var, qualifier, expected
        ),
    );
}

fn check_type(
    ctx: &Context,
    decl: &Declaration,
    param: &ParamTag,
    real: Option<&ParameterSignature>,
    out: &mut Findings,
) {
    let normalized = normalize_union(&param.ty);
    if normalized != param.ty {
        let mut fix = Changeset::new();
        if let Some(value) = param.value {
            fix.replace(value, param.with_type(&normalized));
        }
        out.report_fixable(
            Code::IncorrectParamVarName,
            param.tag,
            format!(
                "Expected \"{}\" but found \"{}\" for parameter type",
                normalized, param.ty
            ),
            fix,
        );
        return;
    }

    if !ctx.type_hints || split_union(&param.ty).len() != 1 {
        return;
    }
    let Some(real) = real else {
        return;
    };

    let hint = real.declared_type.trim_start_matches('?');
    match suggested_hint(&param.ty, ctx.min_version) {
        Some(suggested) if hint.is_empty() => {
            let code = if is_scalar(&suggested) {
                Code::ScalarTypeHintMissing
            } else {
                Code::TypeHintMissing
            };
            out.report(
                code,
                decl.index,
                format!("Type hint \"{}\" missing for {}", suggested, param.var),
            );
        }
        Some(suggested) if !hint_matches(&suggested, hint) => {
            out.report(
                Code::IncorrectTypeHint,
                decl.index,
                format!(
                    "Expected type hint \"{}\"; found \"{}\" for {}",
                    suggested, real.declared_type, param.var
                ),
            );
        }
        None if !hint.is_empty() => {
            out.report(
                Code::InvalidTypeHint,
                decl.index,
                format!(
                    "Unknown type hint \"{}\" found for {}",
                    real.declared_type, param.var
                ),
            );
        }
        _ => {}
    }
}

/// Case-insensitive, and a qualified name matches its unqualified hint.
fn hint_matches(suggested: &str, hint: &str) -> bool {
    let suggested = suggested.trim_start_matches('\\').to_ascii_lowercase();
    let hint = hint.trim_start_matches('\\').to_ascii_lowercase();
    suggested == hint || suggested.ends_with(&format!("\\{}", hint))
}

/// The parameter type declaration a documented type implies, if the target
/// version has one.
pub fn suggested_hint(doc_type: &str, min_version: LanguageVersion) -> Option<String> {
    let name = doc_type.strip_prefix('?').unwrap_or(doc_type);
    let lower = name.to_ascii_lowercase();

    if lower.contains("callable") || lower.contains("callback") {
        return Some("callable".to_string());
    }
    if name.ends_with("[]") || lower.starts_with("array") {
        return Some("array".to_string());
    }
    if lower == "self" {
        return Some("self".to_string());
    }
    if !is_builtin(name) {
        return Some(name.to_string());
    }

    let gate = match lower.as_str() {
        "string" | "int" | "float" | "bool" => LanguageVersion::SCALAR_HINTS,
        "iterable" => LanguageVersion::ITERABLE_HINT,
        "object" => LanguageVersion::OBJECT_HINT,
        _ => return None,
    };
    (min_version >= gate).then_some(lower)
}
