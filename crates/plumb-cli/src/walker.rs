use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use plumb_core::config::PlumbConfig;

/// Per-directory ignore file, read like `.gitignore`.
pub const IGNORE_FILE: &str = ".plumbignore";

/// Finds source files under a directory, honouring `.gitignore`,
/// `.plumbignore`, the configured extensions, and `ignore_patterns`.
pub struct FileWalker {
    base: PathBuf,
    extensions: Vec<String>,
    ignored: GlobSet,
}

impl FileWalker {
    /// `base` is the project root that `ignore_patterns` are relative to.
    pub fn new(base: &Path, config: &PlumbConfig) -> Self {
        Self {
            base: base.to_path_buf(),
            extensions: config.extensions.clone(),
            ignored: build_globset(&config.ignore_patterns),
        }
    }

    pub fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let mut entries = Vec::new();

        let walker = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .require_git(false)
            .add_custom_ignore_filename(IGNORE_FILE)
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "walk error");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if self.accepts(&path) {
                entries.push(path);
            }
        }

        entries.sort();
        entries
    }

    /// Extension and `ignore_patterns` filter.
    pub fn accepts(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)));
        has_extension && !self.ignored.is_match(path.strip_prefix(&self.base).unwrap_or(path))
    }
}

/// Invalid patterns are logged and skipped.
fn build_globset(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => tracing::warn!(pattern = %pattern, error = %e, "ignoring invalid ignore pattern"),
        }
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignore patterns disabled");
        GlobSet::empty()
    })
}
