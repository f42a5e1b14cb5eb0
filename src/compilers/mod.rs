//! Compiler adapters
//!
//! A `Compiler` translates one source kind into output text plus optional
//! diagnostics. Adapters are selected purely by the `SourceKind` on the
//! configuration entry, through a `CompilerRegistry` owned by the batch
//! orchestrator. This is the seam where new source formats are added
//! without touching orchestration logic.
//!
//! Adapters must be pure with respect to the file system beyond reading
//! their declared input: no adapter writes declared output paths itself.

pub mod passthrough;
pub mod tool;

pub use passthrough::PassthroughCompiler;
pub use tool::ToolCompiler;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::error::Result;
use crate::models::CompiledOutput;

/// Source kind discriminator for a configuration entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// LESS style sheets (`.less`)
    Less,
    /// Sass/SCSS style sheets (`.scss`, `.sass`)
    Sass,
    /// Stylus style sheets (`.styl`)
    Stylus,
    /// CoffeeScript sources (`.coffee`)
    Coffee,
    /// Plain CSS copied through unchanged (`.css`), for minify/gzip-only runs
    Css,
}

impl SourceKind {
    /// Derive the source kind from a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "less" => Some(Self::Less),
            "scss" | "sass" => Some(Self::Sass),
            "styl" => Some(Self::Stylus),
            "coffee" => Some(Self::Coffee),
            "css" => Some(Self::Css),
            _ => None,
        }
    }

    /// Derive the source kind from an input path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Extension of the output this kind compiles to (without the dot)
    pub fn output_extension(&self) -> &'static str {
        match self {
            Self::Less | Self::Sass | Self::Stylus | Self::Css => "css",
            Self::Coffee => "js",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Less => "less",
            Self::Sass => "sass",
            Self::Stylus => "stylus",
            Self::Coffee => "coffee",
            Self::Css => "css",
        };
        write!(f, "{name}")
    }
}

/// Pluggable compiler adapter for one source kind
pub trait Compiler: Send + Sync {
    /// The source kind this adapter handles
    fn kind(&self) -> SourceKind;

    /// Compile one input file into output text plus optional source map.
    ///
    /// Fatal failures return `Error::Compile`; `CompiledOutput.diagnostics`
    /// carries non-fatal warnings only.
    fn compile(&self, input: &Path, config: &BuildConfig) -> Result<CompiledOutput>;
}

/// Registry mapping source kinds to compiler adapters.
///
/// Registering a second adapter for the same kind replaces the first.
#[derive(Default)]
pub struct CompilerRegistry {
    compilers: HashMap<SourceKind, Box<dyn Compiler>>,
}

impl CompilerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            compilers: HashMap::new(),
        }
    }

    /// Register an adapter under its declared kind
    pub fn register(&mut self, compiler: Box<dyn Compiler>) {
        self.compilers.insert(compiler.kind(), compiler);
    }

    /// Get the adapter for a source kind
    pub fn get(&self, kind: SourceKind) -> Option<&dyn Compiler> {
        self.compilers.get(&kind).map(|c| c.as_ref())
    }
}

/// Registry with all built-in adapters wired up
pub fn default_compilers() -> CompilerRegistry {
    let mut registry = CompilerRegistry::new();
    registry.register(Box::new(ToolCompiler::less()));
    registry.register(Box::new(ToolCompiler::sass()));
    registry.register(Box::new(ToolCompiler::stylus()));
    registry.register(Box::new(ToolCompiler::coffee()));
    registry.register(Box::new(PassthroughCompiler::new()));
    registry
}
