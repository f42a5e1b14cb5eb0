//! Core data models for webforge
//!
//! Defines the records exchanged between pipeline stages:
//! - `CompiledOutput`: result of compiling one unit
//! - `MinifyOutcome`: result of the minify/compress stage
//! - `Diagnostic`: non-fatal compiler/minifier chatter
//! - `ProcessResult`: per-configuration outcome returned to the caller
//!
//! All intermediate buffers are owned by the stage that produced them and
//! handed by value to the next stage.

use crate::config::BuildConfig;
use crate::error::Error;

/// Severity of a non-fatal diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A non-fatal message reported by a compiler or minifier alongside output
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl Diagnostic {
    /// Create a warning diagnostic without position information
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line: None,
            column: None,
        }
    }
}

/// Result of compiling one unit.
///
/// Fatal failures never reach this type; adapters return `Error::Compile`
/// instead, so code carried here is always usable.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledOutput {
    /// Compiled output text
    pub code: String,
    /// Source map text, when the compiler produced one
    pub source_map: Option<String>,
    /// Non-fatal diagnostics
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of the minify/compress stage for one unit
#[derive(Debug, Clone, PartialEq)]
pub struct MinifyOutcome {
    /// Minified output text
    pub minified: String,
    /// Gzip bytes, derived from the minified text, when gzip was requested
    pub gzip: Option<Vec<u8>>,
    /// Non-fatal diagnostics
    pub diagnostics: Vec<Diagnostic>,
}

/// Per-configuration outcome record.
///
/// Created once per configuration by the batch orchestrator, immutable
/// afterwards. An empty error list means success; `has_changes` is the
/// logical OR across every file the configuration could produce in the run.
#[derive(Debug)]
pub struct ProcessResult {
    /// The originating configuration
    pub config: BuildConfig,
    /// Errors captured while processing this configuration, in order
    pub errors: Vec<Error>,
    /// Whether any file actually got (re)written
    pub has_changes: bool,
}

impl ProcessResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
