use crate::human_helpers::format_violation_human;
use crate::OutputFormatter;
use plumb_enforce::types::{FixResult, LintResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_lint(&self, result: &LintResult) -> String {
        if result.errors.is_empty() && result.warnings.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();

        for v in &result.errors {
            out.push_str(&format_violation_human(v));
        }
        for v in &result.warnings {
            out.push_str(&format_violation_human(v));
        }

        out.push_str(&format!(
            "\n{} error(s), {} warning(s) in {} file(s)\n",
            result.errors.len(),
            result.warnings.len(),
            result.files_analyzed.len(),
        ));
        if result.info.fixable > 0 {
            out.push_str(&format!(
                "{} violation(s) fixable with `plumb fix`\n",
                result.info.fixable
            ));
        }

        out
    }

    fn format_fix(&self, result: &FixResult) -> String {
        let verb = if result.dry_run { "would fix" } else { "fixed" };
        let mut out = String::new();
        let mut changed = 0;
        let mut remaining = 0;

        for file in &result.files {
            remaining += file.remaining.iter().filter(|v| !v.suppressed).count();
            if file.applied == 0 && file.converged {
                continue;
            }
            changed += 1;
            out.push_str(&format!(
                "{} {}: {} change(s) in {} pass(es)",
                verb, file.file, file.applied, file.passes,
            ));
            if !file.converged {
                out.push_str(" (did not converge)");
            }
            out.push('\n');
        }

        for v in result
            .files
            .iter()
            .flat_map(|f| f.remaining.iter())
            .filter(|v| !v.suppressed)
        {
            out.push_str(&format_violation_human(v));
        }

        if changed == 0 && remaining == 0 {
            return "No violations to fix.\n".to_string();
        }
        out.push_str(&format!(
            "\n{} file(s) {}, {} violation(s) remaining\n",
            changed, verb, remaining,
        ));
        out
    }
}
