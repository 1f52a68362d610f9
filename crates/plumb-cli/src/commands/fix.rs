use std::fs;
use std::path::Path;

use plumb_core::error::PlumbError;
use plumb_enforce::engine::LintEngine;
use plumb_enforce::types::{FileFix, FixResult};
use plumb_output::OutputFormatter;
use rayon::prelude::*;

/// Run `plumb fix [PATHS..]` and return the exit code: 0 when every file
/// settled clean, 1 when violations remain, 2 on I/O failure.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    paths: Vec<String>,
    dry_run: bool,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("plumb fix: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config = super::load_config(&cwd);
    let files = match super::resolve_targets(&cwd, &config, &paths) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("plumb fix: {}", e);
            return 2;
        }
    };

    let engine = LintEngine::new(config);
    let outcomes: Vec<Result<FileFix, PlumbError>> = files
        .par_iter()
        .map(|path| fix_file(&engine, &cwd, path, dry_run))
        .collect();

    let mut fixes = Vec::new();
    let mut failed = false;
    for outcome in outcomes {
        match outcome {
            Ok(fix) => fixes.push(fix),
            Err(e) => {
                eprintln!("plumb fix: {}", e);
                failed = true;
            }
        }
    }

    let result = FixResult::new(dry_run, fixes);
    if verbose {
        eprintln!(
            "plumb fix: {} file(s), status {}",
            result.files.len(),
            result.status
        );
    }
    let output = formatter.format_fix(&result);
    if !output.is_empty() {
        println!("{}", output);
    }

    if failed {
        2
    } else if result.status == "partial" {
        1
    } else {
        0
    }
}

fn fix_file(
    engine: &LintEngine,
    cwd: &Path,
    path: &Path,
    dry_run: bool,
) -> Result<FileFix, PlumbError> {
    let source = fs::read_to_string(path).map_err(|e| PlumbError::io(path, e))?;
    let rel = super::make_relative(cwd, path);
    let outcome = engine.fix_source(&rel, &source);

    if !dry_run && outcome.source != source {
        fs::write(path, &outcome.source).map_err(|e| PlumbError::io(path, e))?;
        tracing::info!(file = %rel, passes = outcome.passes, applied = outcome.applied, "fixed");
    }
    Ok(FileFix::from_outcome(rel, &outcome))
}
