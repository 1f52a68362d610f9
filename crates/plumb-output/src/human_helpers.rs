use plumb_enforce::types::{Severity, Violation};

pub(crate) fn format_violation_human(v: &Violation) -> String {
    let severity_label = match v.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };

    let mut out = format!(
        "{}[{}]: {}\n  --> {}:{}:{}\n",
        severity_label, v.code, v.message, v.file, v.line, v.column,
    );

    if let Some(fix) = &v.fix_hint {
        out.push_str(&format!("   = fix: {}\n", fix));
    }

    if v.suppressed {
        if let Some(hint) = &v.suppress_hint {
            out.push_str(&format!("   = {}\n", hint));
        }
    }

    out
}
