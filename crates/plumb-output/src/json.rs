use crate::OutputFormatter;
use plumb_enforce::types::{FixResult, LintResult};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_lint(&self, result: &LintResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_fix(&self, result: &FixResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
