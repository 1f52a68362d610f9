//! Output formatters for plumb command results.
//!
//! Provides two output modes:
//! - **Human** (default): compiler-style diagnostics for terminal users
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use plumb_enforce::types::{FixResult, LintResult};

pub trait OutputFormatter {
    fn format_lint(&self, result: &LintResult) -> String;
    fn format_fix(&self, result: &FixResult) -> String;
}
