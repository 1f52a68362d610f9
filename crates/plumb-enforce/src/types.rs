use serde::{Deserialize, Serialize};

use crate::codes::{Code, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub rule: Rule,
    pub code: Code,
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    /// Token index the violation is anchored to.
    pub token: usize,
    pub fixable: bool,
    pub fix_hint: Option<String>,
    pub suppressed: bool,
    pub suppress_hint: Option<String>,
}

/// All violations for one file, in report order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub violations: Vec<Violation>,
}

impl FileReport {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            violations: Vec::new(),
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    pub fn has_code(&self, code: Code) -> bool {
        self.violations.iter().any(|v| v.code == code)
    }

    pub fn codes(&self) -> Vec<Code> {
        self.violations.iter().map(|v| v.code).collect()
    }

    /// Unsuppressed violations that carry a fix.
    pub fn fixable(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.fixable && !v.suppressed)
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error" | "warning"
    pub files_analyzed: Vec<String>,
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
    pub info: LintInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintInfo {
    pub suppressed: u32,
    pub fixable: u32,
}

/// What `fix_source` did to one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixOutcome {
    pub source: String,
    pub passes: u32,
    pub applied: usize,
    pub rejected: usize,
    /// False when the pass limit was hit or a pass could apply nothing.
    pub converged: bool,
    /// Violations left after the last pass.
    pub report: FileReport,
}

impl FixOutcome {
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixResult {
    pub version: String,
    pub command: String,
    pub status: String, // "fixed" | "clean" | "partial"
    pub dry_run: bool,
    pub files: Vec<FileFix>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFix {
    pub file: String,
    pub passes: u32,
    pub applied: usize,
    pub rejected: usize,
    pub converged: bool,
    pub remaining: Vec<Violation>,
}

impl FileFix {
    pub fn from_outcome(file: impl Into<String>, outcome: &FixOutcome) -> Self {
        Self {
            file: file.into(),
            passes: outcome.passes,
            applied: outcome.applied,
            rejected: outcome.rejected,
            converged: outcome.converged,
            remaining: outcome.report.violations.clone(),
        }
    }
}

impl FixResult {
    /// `partial` when a file did not converge or still has unsuppressed
    /// violations, `fixed` when anything changed, `clean` otherwise.
    pub fn new(dry_run: bool, files: Vec<FileFix>) -> Self {
        let outstanding = files
            .iter()
            .any(|f| !f.converged || f.remaining.iter().any(|v| !v.suppressed));
        let status = if outstanding {
            "partial"
        } else if files.iter().any(|f| f.applied > 0) {
            "fixed"
        } else {
            "clean"
        };
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "fix".to_string(),
            status: status.to_string(),
            dry_run,
            files,
        }
    }
}
