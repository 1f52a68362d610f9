//! Configuration file loading for plumb.
//!
//! Reads `.plumb/plumb.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PlumbError;
use crate::version::LanguageVersion;

/// Name of the directory holding the config file.
pub const CONFIG_DIR: &str = ".plumb";
/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "plumb.json";

/// Top-level plumb configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlumbConfig {
    #[serde(default = "default_version")]
    pub version: String,
    /// Lowest language version the checked code must run on.
    #[serde(default)]
    pub min_language_version: LanguageVersion,
    #[serde(default)]
    pub enforce: EnforceConfig,
    #[serde(default)]
    pub fix: FixConfig,
    /// File extensions (without the dot) the walker picks up.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Violation codes (`Rule.Code` or bare `Code`) downgraded to INFO.
    #[serde(default)]
    pub suppress: Vec<String>,
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Rule family toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnforceConfig {
    #[serde(default = "default_true")]
    pub doc_comments: bool,
    #[serde(default = "default_true")]
    pub function_comments: bool,
    #[serde(default = "default_true")]
    pub variable_comments: bool,
    /// Cross-check single `@param` types against declared type hints.
    #[serde(default = "default_true")]
    pub type_hints: bool,
}

/// Fix loop tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixConfig {
    #[serde(default = "default_max_passes")]
    pub max_passes: u32,
}

fn default_true() -> bool {
    true
}
fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_max_passes() -> u32 {
    50
}
fn default_extensions() -> Vec<String> {
    vec!["php".to_string(), "inc".to_string()]
}

impl Default for EnforceConfig {
    fn default() -> Self {
        Self {
            doc_comments: true,
            function_comments: true,
            variable_comments: true,
            type_hints: true,
        }
    }
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            max_passes: default_max_passes(),
        }
    }
}

impl Default for PlumbConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            min_language_version: LanguageVersion::default(),
            enforce: EnforceConfig::default(),
            fix: FixConfig::default(),
            extensions: default_extensions(),
            suppress: vec![],
            ignore_patterns: vec![],
        }
    }
}

impl PlumbConfig {
    /// Load configuration from `plumb.json` inside the given `.plumb` directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(plumb_dir: &Path) -> Self {
        match Self::try_load(plumb_dir) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    /// Like [`PlumbConfig::load`], but surfaces read and parse failures.
    /// A missing file is not an error.
    pub fn try_load(plumb_dir: &Path) -> Result<Self, PlumbError> {
        let config_path = plumb_dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %config_path.display(), "no config file");
                return Ok(Self::default());
            }
            Err(e) => return Err(PlumbError::io(config_path, e)),
        };
        serde_json::from_str(&content).map_err(|e| PlumbError::Config {
            path: config_path,
            message: e.to_string(),
        })
    }

    /// Whether `path` has one of the configured extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
    }
}
