//! Stable violation codes.
//!
//! Every code belongs to one rule family and is displayed as `Rule.Code`
//! (`DocComment.Empty`, `FunctionComment.MissingReturn`). Both forms are
//! accepted for suppression.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    DocComment,
    FunctionComment,
    VariableComment,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::DocComment => "DocComment",
            Rule::FunctionComment => "FunctionComment",
            Rule::VariableComment => "VariableComment",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Code {
    // DocComment
    Empty,
    ContentAfterOpen,
    ContentBeforeClose,
    SpacingAfter,
    MissingShort,
    SpacingBeforeShort,
    ShortNotCapital,
    SpacingBetween,
    LongNotCapital,
    SpacingBeforeTags,
    ParamGroup,
    ParamNotFirst,
    TagsNotGrouped,
    TagValueIndent,
    SpacingAfterTagGroup,

    // FunctionComment
    MissingFunctionComment,
    FunctionWrongStyle,
    DuplicateReturn,
    MissingReturn,
    MissingReturnType,
    InvalidReturn,
    InvalidReturnVoid,
    InvalidNoReturn,
    InvalidReturnNotVoid,
    InvalidThrows,
    EmptyThrows,
    ThrowsNotCapital,
    ThrowsNoFullStop,
    MissingParamType,
    MissingParamName,
    MissingParamComment,
    IncorrectParamVarName,
    TypeHintMissing,
    ScalarTypeHintMissing,
    IncorrectTypeHint,
    InvalidTypeHint,
    SpacingAfterParamType,
    ParamNameNoMatch,
    ParamNameNoCaseMatch,
    ExtraParamComment,
    SpacingAfterParamName,
    ParamCommentNotCapital,
    ParamCommentFullStop,
    MissingParamTag,

    // VariableComment
    MissingVariableComment,
    VariableWrongStyle,
    DuplicateVar,
    EmptySees,
    TagNotAllowed,
    MissingVar,
    VarOrder,
    EmptyVar,
    IncorrectVarType,
}

impl Code {
    pub const ALL: &'static [Code] = &[
        Code::Empty,
        Code::ContentAfterOpen,
        Code::ContentBeforeClose,
        Code::SpacingAfter,
        Code::MissingShort,
        Code::SpacingBeforeShort,
        Code::ShortNotCapital,
        Code::SpacingBetween,
        Code::LongNotCapital,
        Code::SpacingBeforeTags,
        Code::ParamGroup,
        Code::ParamNotFirst,
        Code::TagsNotGrouped,
        Code::TagValueIndent,
        Code::SpacingAfterTagGroup,
        Code::MissingFunctionComment,
        Code::FunctionWrongStyle,
        Code::DuplicateReturn,
        Code::MissingReturn,
        Code::MissingReturnType,
        Code::InvalidReturn,
        Code::InvalidReturnVoid,
        Code::InvalidNoReturn,
        Code::InvalidReturnNotVoid,
        Code::InvalidThrows,
        Code::EmptyThrows,
        Code::ThrowsNotCapital,
        Code::ThrowsNoFullStop,
        Code::MissingParamType,
        Code::MissingParamName,
        Code::MissingParamComment,
        Code::IncorrectParamVarName,
        Code::TypeHintMissing,
        Code::ScalarTypeHintMissing,
        Code::IncorrectTypeHint,
        Code::InvalidTypeHint,
        Code::SpacingAfterParamType,
        Code::ParamNameNoMatch,
        Code::ParamNameNoCaseMatch,
        Code::ExtraParamComment,
        Code::SpacingAfterParamName,
        Code::ParamCommentNotCapital,
        Code::ParamCommentFullStop,
        Code::MissingParamTag,
        Code::MissingVariableComment,
        Code::VariableWrongStyle,
        Code::DuplicateVar,
        Code::EmptySees,
        Code::TagNotAllowed,
        Code::MissingVar,
        Code::VarOrder,
        Code::EmptyVar,
        Code::IncorrectVarType,
    ];

    pub fn rule(&self) -> Rule {
        use Code::*;
        match self {
            Empty | ContentAfterOpen | ContentBeforeClose | SpacingAfter | MissingShort
            | SpacingBeforeShort | ShortNotCapital | SpacingBetween | LongNotCapital
            | SpacingBeforeTags | ParamGroup | ParamNotFirst | TagsNotGrouped
            | TagValueIndent | SpacingAfterTagGroup => Rule::DocComment,

            MissingVariableComment | VariableWrongStyle | DuplicateVar | EmptySees
            | TagNotAllowed | MissingVar | VarOrder | EmptyVar | IncorrectVarType => {
                Rule::VariableComment
            }

            _ => Rule::FunctionComment,
        }
    }

    /// Short name within the rule family.
    pub fn name(&self) -> &'static str {
        use Code::*;
        match self {
            Empty => "Empty",
            ContentAfterOpen => "ContentAfterOpen",
            ContentBeforeClose => "ContentBeforeClose",
            SpacingAfter => "SpacingAfter",
            MissingShort => "MissingShort",
            SpacingBeforeShort => "SpacingBeforeShort",
            ShortNotCapital => "ShortNotCapital",
            SpacingBetween => "SpacingBetween",
            LongNotCapital => "LongNotCapital",
            SpacingBeforeTags => "SpacingBeforeTags",
            ParamGroup => "ParamGroup",
            ParamNotFirst => "ParamNotFirst",
            TagsNotGrouped => "TagsNotGrouped",
            TagValueIndent => "TagValueIndent",
            SpacingAfterTagGroup => "SpacingAfterTagGroup",
            MissingFunctionComment | MissingVariableComment => "Missing",
            FunctionWrongStyle | VariableWrongStyle => "WrongStyle",
            DuplicateReturn => "DuplicateReturn",
            MissingReturn => "MissingReturn",
            MissingReturnType => "MissingReturnType",
            InvalidReturn => "InvalidReturn",
            InvalidReturnVoid => "InvalidReturnVoid",
            InvalidNoReturn => "InvalidNoReturn",
            InvalidReturnNotVoid => "InvalidReturnNotVoid",
            InvalidThrows => "InvalidThrows",
            EmptyThrows => "EmptyThrows",
            ThrowsNotCapital => "ThrowsNotCapital",
            ThrowsNoFullStop => "ThrowsNoFullStop",
            MissingParamType => "MissingParamType",
            MissingParamName => "MissingParamName",
            MissingParamComment => "MissingParamComment",
            IncorrectParamVarName => "IncorrectParamVarName",
            TypeHintMissing => "TypeHintMissing",
            ScalarTypeHintMissing => "ScalarTypeHintMissing",
            IncorrectTypeHint => "IncorrectTypeHint",
            InvalidTypeHint => "InvalidTypeHint",
            SpacingAfterParamType => "SpacingAfterParamType",
            ParamNameNoMatch => "ParamNameNoMatch",
            ParamNameNoCaseMatch => "ParamNameNoCaseMatch",
            ExtraParamComment => "ExtraParamComment",
            SpacingAfterParamName => "SpacingAfterParamName",
            ParamCommentNotCapital => "ParamCommentNotCapital",
            ParamCommentFullStop => "ParamCommentFullStop",
            MissingParamTag => "MissingParamTag",
            DuplicateVar => "DuplicateVar",
            EmptySees => "EmptySees",
            TagNotAllowed => "TagNotAllowed",
            MissingVar => "MissingVar",
            VarOrder => "VarOrder",
            EmptyVar => "EmptyVar",
            IncorrectVarType => "IncorrectVarType",
        }
    }

    /// `Rule.Code`, the form used in reports and config.
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.rule(), self.name())
    }

    pub fn default_severity(&self) -> Severity {
        match self {
            Code::ScalarTypeHintMissing | Code::TagNotAllowed => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Accepts `Rule.Code` only; bare names are ambiguous (`Missing`).
    pub fn parse(qualified: &str) -> Option<Code> {
        Code::ALL.iter().copied().find(|c| c.qualified() == qualified)
    }

    /// True when `pattern` is this code's qualified form or its bare name.
    pub fn matches(&self, pattern: &str) -> bool {
        match pattern.split_once('.') {
            Some((rule, name)) => rule == self.rule().as_str() && name == self.name(),
            None => pattern == self.name(),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.rule(), self.name())
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.qualified()
    }
}

impl TryFrom<String> for Code {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Code::parse(&value).ok_or_else(|| format!("unknown violation code: {value}"))
    }
}
