use std::path::PathBuf;

/// Infrastructure failures. Lint findings are never errors; they are
/// reported as violations.
#[derive(Debug, thiserror::Error)]
pub enum PlumbError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid language version: {0}")]
    InvalidVersion(String),
}

impl PlumbError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlumbError::Io {
            path: path.into(),
            source,
        }
    }
}
