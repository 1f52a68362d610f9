pub mod check;
pub mod fix;

use std::path::{Path, PathBuf};

use plumb_core::config::{PlumbConfig, CONFIG_DIR};
use plumb_core::error::PlumbError;

use crate::walker::FileWalker;

/// Configuration from `.plumb/` under `cwd`, or defaults.
pub(crate) fn load_config(cwd: &Path) -> PlumbConfig {
    PlumbConfig::load(&cwd.join(CONFIG_DIR))
}

/// Expand the command's path arguments into the files to process.
/// Directories are walked; files named explicitly are taken as given.
pub(crate) fn resolve_targets(
    cwd: &Path,
    config: &PlumbConfig,
    paths: &[String],
) -> Result<Vec<PathBuf>, PlumbError> {
    let walker = FileWalker::new(cwd, config);
    if paths.is_empty() {
        return Ok(walker.walk(cwd));
    }

    let mut files = Vec::new();
    for arg in paths {
        let path = Path::new(arg);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        let meta = std::fs::metadata(&path).map_err(|e| PlumbError::io(&path, e))?;
        if meta.is_dir() {
            files.extend(walker.walk(&path));
        } else {
            files.push(path);
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Make a path relative to the project root.
pub(crate) fn make_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
