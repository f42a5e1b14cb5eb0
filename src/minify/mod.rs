//! Minify/compress stage
//!
//! Optional post-processing after a successful compile: minify the output,
//! then optionally gzip the minified bytes. Both sub-steps follow the same
//! change-detection/write discipline as the main stage and fire their own
//! event names, so a listener can tell "minified" from "compiled".
//!
//! Gzip never runs on non-minified bytes: the gzip copy, when present,
//! always derives from the minified text.

pub mod css;
pub mod script;

pub use css::CssMinifier;
pub use script::ScriptMinifier;

use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use thiserror::Error as ThisError;

use crate::config::{BuildConfig, MinifySettings};
use crate::error::Error;
use crate::events::{BuildEvent, ListenerRegistry};
use crate::models::MinifyOutcome;
use crate::resolver::CompilationUnit;

/// Output format a minifier handles, derived from the output extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Css,
    Js,
}

impl OutputKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())?
            .to_ascii_lowercase()
            .as_str()
        {
            "css" => Some(Self::Css),
            "js" => Some(Self::Js),
            _ => None,
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css => write!(f, "css"),
            Self::Js => write!(f, "js"),
        }
    }
}

/// Error raised by a minifier implementation
#[derive(Debug, ThisError)]
#[error("{0}")]
pub struct MinifyError(pub String);

/// Pluggable minifier for one output format
pub trait Minifier: Send + Sync {
    /// The output format this minifier handles
    fn output_kind(&self) -> OutputKind;

    /// Minify source text. Implementations leave `gzip` unset; the stage
    /// fills it in when the configuration requests compression.
    fn minify(
        &self,
        source: &str,
        settings: &MinifySettings,
    ) -> std::result::Result<MinifyOutcome, MinifyError>;
}

/// Registry mapping output formats to minifiers.
///
/// Registering a second minifier for the same format replaces the first.
#[derive(Default)]
pub struct MinifierRegistry {
    minifiers: HashMap<OutputKind, Box<dyn Minifier>>,
}

impl MinifierRegistry {
    pub fn new() -> Self {
        Self {
            minifiers: HashMap::new(),
        }
    }

    pub fn register(&mut self, minifier: Box<dyn Minifier>) {
        self.minifiers.insert(minifier.output_kind(), minifier);
    }

    pub fn get(&self, kind: OutputKind) -> Option<&dyn Minifier> {
        self.minifiers.get(&kind).map(|m| m.as_ref())
    }
}

/// Registry with the built-in CSS and JS minifiers wired up
pub fn default_minifiers() -> MinifierRegistry {
    let mut registry = MinifierRegistry::new();
    registry.register(Box::new(CssMinifier::new()));
    registry.register(Box::new(ScriptMinifier::new()));
    registry
}

/// Run the minify/compress stage for one compiled unit.
///
/// Writes the minified sibling (and the gzip sibling when requested) with
/// the usual change-detection discipline, firing the stage-specific events
/// around each write. `has_changes` is OR-ed with the stage's own writes.
///
/// A failure here is fatal to this stage only; the already-written main
/// output is never invalidated.
pub fn post_process(
    unit: &CompilationUnit,
    source: &str,
    config: &BuildConfig,
    minifiers: &MinifierRegistry,
    listeners: &ListenerRegistry,
    has_changes: &mut bool,
) -> crate::Result<MinifyOutcome> {
    let min_file = unit.min_file();

    let kind = OutputKind::from_path(&unit.output).ok_or_else(|| Error::PostProcess {
        output: unit.output.clone(),
        message: "no minifier for this output type".to_string(),
    })?;
    let minifier = minifiers.get(kind).ok_or_else(|| Error::PostProcess {
        output: min_file.clone(),
        message: format!("no minifier registered for {kind} output"),
    })?;

    let mut outcome = minifier
        .minify(source, &config.minify)
        .map_err(|e| Error::PostProcess {
            output: min_file.clone(),
            message: e.to_string(),
        })?;

    let changed = crate::fs::has_changed(&min_file, outcome.minified.as_bytes())?;
    listeners.emit(&BuildEvent::BeforeWritingMinFile {
        result_file: min_file.clone(),
        has_changes: changed,
    });
    if changed {
        crate::fs::write_file(&min_file, outcome.minified.as_bytes())?;
        listeners.emit(&BuildEvent::AfterWritingMinFile {
            result_file: min_file,
        });
        *has_changes = true;
    }

    if config.minify.gzip {
        let gz_file = unit.gzip_file();
        let gz_bytes = gzip(outcome.minified.as_bytes())?;

        let changed = crate::fs::has_changed(&gz_file, &gz_bytes)?;
        listeners.emit(&BuildEvent::BeforeWritingGzipFile {
            result_file: gz_file.clone(),
            has_changes: changed,
        });
        if changed {
            crate::fs::write_file(&gz_file, &gz_bytes)?;
            listeners.emit(&BuildEvent::AfterWritingGzipFile {
                result_file: gz_file,
            });
            *has_changes = true;
        }

        outcome.gzip = Some(gz_bytes);
    }

    Ok(outcome)
}

fn gzip(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}
