use std::collections::HashSet;

use crate::codes::Code;
use crate::types::{Severity, Violation};

/// Manages suppressed violation codes.
///
/// Patterns are either qualified (`FunctionComment.Missing`) or bare
/// (`TagValueIndent`); a bare name matches that code in every rule family.
/// A suppressed violation:
/// - keeps its code
/// - is changed to severity `INFO` and marked `suppressed = true`
/// - gets a `suppress_hint` explaining the suppression
#[derive(Debug, Default)]
pub struct SuppressionManager {
    patterns: HashSet<String>,
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a code pattern to suppress.
    pub fn suppress(&mut self, pattern: &str) {
        let pattern = pattern.trim();
        if !pattern.is_empty() {
            self.patterns.insert(pattern.to_string());
        }
    }

    pub fn is_suppressed(&self, code: Code) -> bool {
        self.patterns.iter().any(|p| code.matches(p))
    }

    /// Apply suppression to a violation. Unsuppressed codes pass through unchanged.
    pub fn apply(&self, mut violation: Violation) -> Violation {
        if self.is_suppressed(violation.code) {
            violation.suppress_hint = Some(format!(
                "Suppressed {} via --suppress flag",
                violation.code
            ));
            violation.suppressed = true;
            violation.severity = Severity::Info;
        }
        violation
    }

    /// Number of active suppressions.
    pub fn count(&self) -> usize {
        self.patterns.len()
    }
}
