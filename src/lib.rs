//! Webforge - configuration-driven web asset compiler
//!
//! Webforge reads a JSON list of source-to-output mappings, compiles each
//! source with the adapter for its kind (LESS, Sass, Stylus, CoffeeScript,
//! or plain CSS), writes results only when bytes actually changed, and
//! optionally minifies and gzips the output. One bad file never aborts the
//! batch: every configuration reports its own outcome.

pub mod compilers;
pub mod config;
pub mod error;
pub mod events;
pub mod fs;
pub mod minify;
pub mod models;
pub mod presentation;
pub mod processor;
pub mod resolver;

// Re-exports for convenience
pub use compilers::{default_compilers, Compiler, CompilerRegistry, SourceKind};
pub use config::{filter_configs, load_configs, BuildConfig, MinifySettings};
pub use error::{Error, Result};
pub use events::{BuildEvent, BuildListener, ListenerRegistry};
pub use minify::{default_minifiers, Minifier, MinifierRegistry, OutputKind};
pub use models::{CompiledOutput, Diagnostic, MinifyOutcome, ProcessResult, Severity};
pub use presentation::{ConsoleListener, JsonListener};
pub use processor::ConfigFileProcessor;
pub use resolver::CompilationUnit;
