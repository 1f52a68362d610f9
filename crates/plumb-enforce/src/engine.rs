use plumb_core::config::PlumbConfig;
use plumb_core::decl::{collect_declarations, collect_member_variables, Declaration};
use plumb_core::lexer::tokenize;
use plumb_core::token::{TokenKind, TokenStream};

use crate::codes::Code;
use crate::context::Context;
use crate::findings::{Finding, Findings};
use crate::fixer::{Changeset, Fixer};
use crate::locator::{function_comment, Attachment, CommentBlock};
use crate::suppress::SuppressionManager;
use crate::types::{FileReport, FixOutcome, LintInfo, LintResult, Severity, Violation};
use crate::{params, returns, structure, throws, variable};

/// What the engine visits, in token order.
enum Unit {
    Block(CommentBlock),
    Function(Declaration),
    Member(usize),
}

impl Unit {
    fn position(&self) -> usize {
        match self {
            Unit::Block(block) => block.open,
            Unit::Function(decl) => decl.index,
            Unit::Member(index) => *index,
        }
    }
}

/// Doc-comment lint engine. Holds configuration and suppressions only, so one
/// engine can lint many files concurrently.
#[derive(Debug)]
pub struct LintEngine {
    config: PlumbConfig,
    suppressions: SuppressionManager,
}

impl LintEngine {
    pub fn new(config: PlumbConfig) -> Self {
        let mut suppressions = SuppressionManager::new();
        for code in &config.suppress {
            suppressions.suppress(code);
        }
        Self {
            config,
            suppressions,
        }
    }

    pub fn config(&self) -> &PlumbConfig {
        &self.config
    }

    /// Suppress a code pattern (`Rule.Code` or a bare code name).
    pub fn suppress(&mut self, code: &str) {
        self.suppressions.suppress(code);
    }

    pub fn lint_source(&self, path: &str, source: &str) -> FileReport {
        let stream = tokenize(source);
        self.lint_stream(path, &stream).0
    }

    /// Lint a token stream. Returns the report and, in report order, the
    /// changesets of every unsuppressed fixable violation.
    pub fn lint_stream(&self, path: &str, stream: &TokenStream) -> (FileReport, Vec<Changeset>) {
        let findings = self.collect_findings(stream);
        tracing::debug!(file = path, findings = findings.len(), "linted");

        let mut report = FileReport::new(path);
        let mut changesets = Vec::new();
        for finding in findings.into_vec() {
            let (violation, fix) = to_violation(path, stream, finding);
            let violation = self.suppressions.apply(violation);
            if let Some(fix) = fix.filter(|_| !violation.suppressed) {
                changesets.push(fix);
            }
            report.violations.push(violation);
        }
        (report, changesets)
    }

    fn collect_findings(&self, stream: &TokenStream) -> Findings {
        let ctx = Context::new(stream, &self.config);
        let enforce = &self.config.enforce;
        let mut units: Vec<Unit> = Vec::new();

        if enforce.doc_comments {
            units.extend(
                (0..stream.len())
                    .filter(|&i| stream.kind(i) == TokenKind::DocCommentOpen)
                    .filter_map(|i| CommentBlock::locate(stream, i))
                    .map(Unit::Block),
            );
        }
        if enforce.function_comments {
            units.extend(collect_declarations(stream).into_iter().map(Unit::Function));
        }
        if enforce.variable_comments {
            units.extend(
                collect_member_variables(stream)
                    .into_iter()
                    .map(|m| Unit::Member(m.index)),
            );
        }
        units.sort_by_key(Unit::position);

        let mut out = Findings::new();
        for unit in &units {
            match unit {
                Unit::Block(block) => structure::check(&ctx, block, &mut out),
                Unit::Function(decl) => check_function(&ctx, decl, &mut out),
                Unit::Member(index) => variable::check(&ctx, *index, &mut out),
            }
        }
        out
    }

    /// Lint and fix until no changeset applies or `fix.max_passes` is reached.
    pub fn fix_source(&self, path: &str, source: &str) -> FixOutcome {
        let max_passes = self.config.fix.max_passes.max(1);
        let mut current = source.to_string();
        let mut passes = 0;
        let mut applied = 0;
        let mut rejected = 0;

        while passes < max_passes {
            let stream = tokenize(&current);
            let (_, changesets) = self.lint_stream(path, &stream);
            if changesets.is_empty() {
                break;
            }
            passes += 1;

            let mut fixer = Fixer::new(&stream);
            for changeset in &changesets {
                if let Err(rejection) = fixer.apply(changeset) {
                    tracing::debug!(file = path, pass = passes, %rejection, "changeset deferred");
                }
            }
            applied += fixer.applied();
            rejected += fixer.rejected();
            tracing::debug!(
                file = path,
                pass = passes,
                applied = fixer.applied(),
                rejected = fixer.rejected(),
                "fix pass"
            );

            let next = fixer.contents();
            if fixer.applied() == 0 || next == current {
                tracing::warn!(file = path, pass = passes, "fix pass made no progress");
                break;
            }
            current = next;
        }

        let (report, remaining) = self.lint_stream(path, &tokenize(&current));
        let converged = remaining.is_empty();
        if !converged && passes >= max_passes {
            tracing::warn!(file = path, max_passes, "fixes did not converge");
        }

        FixOutcome {
            source: current,
            passes,
            applied,
            rejected,
            converged,
            report,
        }
    }

    /// Combine per-file reports into one result.
    pub fn summarize(&self, command: &str, reports: &[FileReport]) -> LintResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut info = LintInfo::default();

        for report in reports {
            for v in &report.violations {
                if v.suppressed {
                    info.suppressed += 1;
                } else if v.fixable {
                    info.fixable += 1;
                }
            }
            Self::partition_violations(report.violations.clone(), &mut errors, &mut warnings);
        }

        let status = if !errors.is_empty() {
            "error"
        } else if warnings.iter().any(|v| !v.suppressed) {
            "warning"
        } else {
            "ok"
        };

        LintResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: command.to_string(),
            status: status.to_string(),
            files_analyzed: reports.iter().map(|r| r.file.clone()).collect(),
            errors,
            warnings,
            info,
        }
    }

    pub(crate) fn partition_violations(
        violations: Vec<Violation>,
        errors: &mut Vec<Violation>,
        warnings: &mut Vec<Violation>,
    ) {
        for v in violations {
            match v.severity {
                Severity::Error => errors.push(v),
                _ => warnings.push(v),
            }
        }
    }
}

/// Location check, then parameters, return, and throws.
fn check_function(ctx: &Context, decl: &Declaration, out: &mut Findings) {
    let block = match function_comment(ctx.stream, decl.index) {
        Attachment::Block(block) => block,
        Attachment::WrongStyle(_) => {
            out.report(
                Code::FunctionWrongStyle,
                decl.index,
                "You must use \"/**\" style comments for a function comment",
            );
            return;
        }
        Attachment::Missing => {
            out.report(
                Code::MissingFunctionComment,
                decl.index,
                "Missing function doc comment",
            );
            return;
        }
    };

    params::check(ctx, &block, decl, out);
    returns::check(ctx, &block, decl, out);
    throws::check(ctx, &block, out);
}

fn to_violation(path: &str, stream: &TokenStream, finding: Finding) -> (Violation, Option<Changeset>) {
    let token = stream.token(finding.token);
    let violation = Violation {
        rule: finding.code.rule(),
        code: finding.code,
        severity: finding.severity,
        message: finding.message,
        file: path.to_string(),
        line: token.line,
        column: token.column,
        token: finding.token,
        fixable: finding.fix.is_some(),
        fix_hint: finding.fix.as_ref().map(Changeset::summary),
        suppressed: false,
        suppress_hint: None,
    };
    (violation, finding.fix)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
