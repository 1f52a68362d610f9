//! Canonical type spellings.
//!
//! `normalize_name` maps one type name to its preferred spelling;
//! `normalize_union` applies it to every `|` alternative and drops repeats,
//! keeping the first occurrence. Both are projections: normalizing twice
//! gives the same result as normalizing once.

/// Built-in type names, in canonical spelling.
pub const BUILTIN_TYPES: &[&str] = &[
    "array", "bool", "callable", "false", "float", "int", "iterable", "mixed", "never", "null",
    "object", "resource", "self", "static", "string", "true", "void",
];

/// Scalars that gained parameter type declarations together.
pub const SCALAR_TYPES: &[&str] = &["string", "int", "float", "bool"];

pub fn normalize_name(name: &str) -> String {
    let name = name.trim();

    if let Some(inner) = name.strip_prefix('?') {
        return format!("?{}", normalize_name(inner));
    }
    if let Some(element) = name.strip_suffix("[]") {
        return format!("{}[]", normalize_name(element));
    }

    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "bool" | "boolean" => return "bool".to_string(),
        "int" | "integer" => return "int".to_string(),
        "float" | "double" | "real" => return "float".to_string(),
        "array" | "array()" => return "array".to_string(),
        _ => {}
    }

    if lower.starts_with("array(") && lower.ends_with(')') {
        return normalize_array_shape(&name[6..name.len() - 1]);
    }

    if BUILTIN_TYPES.contains(&lower.as_str()) {
        return lower;
    }
    name.to_string()
}

/// `array(key => value)` keeps its shape with both sides normalized;
/// anything else collapses to `array`.
fn normalize_array_shape(inner: &str) -> String {
    let parts: Vec<&str> = inner.split("=>").collect();
    match parts.as_slice() {
        [key, value] if !key.trim().is_empty() && !value.trim().is_empty() => {
            format!(
                "array({} => {})",
                normalize_union(key),
                normalize_union(value)
            )
        }
        _ => "array".to_string(),
    }
}

pub fn normalize_union(expr: &str) -> String {
    let mut seen: Vec<String> = Vec::new();
    for alternative in split_union(expr) {
        let normalized = normalize_name(alternative);
        if !seen.contains(&normalized) {
            seen.push(normalized);
        }
    }
    seen.join("|")
}

/// Split on `|` outside of `()` and `<>`. The `>` of `=>` does not close.
pub fn split_union(expr: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut prev = '\0';
    for (i, c) in expr.char_indices() {
        match c {
            '(' | '<' => depth += 1,
            '>' if prev == '=' => {}
            ')' | '>' => depth = depth.saturating_sub(1),
            '|' if depth == 0 => {
                parts.push(&expr[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        prev = c;
    }
    parts.push(&expr[start..]);
    parts
}

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name.to_ascii_lowercase().as_str())
}

pub fn is_scalar(name: &str) -> bool {
    SCALAR_TYPES.contains(&name)
}
