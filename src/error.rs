//! Error types for webforge
//!
//! Uses `thiserror` for library errors. Every failure during a batch run is
//! captured into the owning configuration's `ProcessResult`; nothing escapes
//! the batch orchestrator itself.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for webforge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for webforge operations
#[derive(Error, Debug)]
pub enum Error {
    /// Fatal compiler failure. Isolated to one configuration's main output.
    #[error("compile error in {}: {message}", input.display())]
    Compile { input: PathBuf, message: String },

    /// Minify or gzip failure. The already-written main output stands.
    #[error("post-process error for {}: {message}", output.display())]
    PostProcess { output: PathBuf, message: String },

    /// No compiler adapter registered for the input's source kind
    #[error("no compiler registered for input {}", input.display())]
    UnsupportedInput { input: PathBuf },

    /// Configuration file does not exist
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration file is not valid JSON
    #[error("invalid configuration in {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A configuration entry violates an invariant (e.g. empty paths)
    #[error("invalid configuration entry: {message}")]
    InvalidConfig { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
