use std::fs;

use plumb_core::error::PlumbError;
use plumb_enforce::engine::LintEngine;
use plumb_enforce::types::{FileReport, LintResult};
use plumb_output::OutputFormatter;
use rayon::prelude::*;

/// Run `plumb check [PATHS..]` and return the exit code.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    paths: Vec<String>,
    suppress: Vec<String>,
    strict: bool,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("plumb check: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config = super::load_config(&cwd);
    let files = match super::resolve_targets(&cwd, &config, &paths) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("plumb check: {}", e);
            return 2;
        }
    };

    let mut engine = LintEngine::new(config);
    for code in &suppress {
        engine.suppress(code);
    }

    let outcomes: Vec<Result<FileReport, PlumbError>> = files
        .par_iter()
        .map(|path| {
            let source = fs::read_to_string(path).map_err(|e| PlumbError::io(path, e))?;
            Ok(engine.lint_source(&super::make_relative(&cwd, path), &source))
        })
        .collect();

    let mut reports = Vec::new();
    let mut failed = false;
    for outcome in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("plumb check: {}", e);
                failed = true;
            }
        }
    }

    let result = engine.summarize("check", &reports);
    if verbose {
        eprintln!(
            "plumb check: {} file(s), {} error(s), {} warning(s), {} suppressed",
            result.files_analyzed.len(),
            result.errors.len(),
            result.warnings.len(),
            result.info.suppressed,
        );
    }
    let code = output_result(formatter, &result, strict);
    if failed {
        2
    } else {
        code
    }
}

fn output_result(formatter: &dyn OutputFormatter, result: &LintResult, strict: bool) -> i32 {
    let output = formatter.format_lint(result);
    if !output.is_empty() {
        println!("{}", output);
    }

    let has_errors = !result.errors.is_empty();
    let has_warnings = result.warnings.iter().any(|v| !v.suppressed);
    if has_errors || (strict && has_warnings) {
        1
    } else {
        0
    }
}
