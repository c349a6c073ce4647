/// Crate-wide error type.
///
/// Per-file failures inside a batch never surface as `Err` from the batch
/// operations; they are logged and the file is skipped. `Error` is returned
/// only by single-file operations and by setup steps (config, walker root,
/// exporters) where there is nothing left to continue with.
use std::path::PathBuf;

/// Errors produced by the FileSleuth core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A filesystem call on a specific path failed (missing, permission denied, ...).
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for `AnalyzerConfig`.
    #[error("invalid JSON in config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A category name pattern failed to compile.
    #[error("category {category:?}: invalid name pattern {pattern:?}: {source}")]
    InvalidPattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Two languages claim the same file extension.
    #[error("extension {extension:?} is claimed by both {first:?} and {second:?}")]
    ConflictingExtension {
        extension: String,
        first: String,
        second: String,
    },

    /// An ignore pattern is not a valid glob.
    #[error("invalid ignore pattern {pattern:?}: {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// The scan root does not exist or is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an `io::Error` together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
