//! Passthrough adapter for plain CSS
//!
//! Copies the input through unchanged so that plain style sheets can still
//! go through change detection, minification, and gzip without a
//! preprocessor in front.

use std::path::Path;

use crate::compilers::{Compiler, SourceKind};
use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::models::CompiledOutput;

/// Adapter that passes plain CSS through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughCompiler;

impl PassthroughCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl Compiler for PassthroughCompiler {
    fn kind(&self) -> SourceKind {
        SourceKind::Css
    }

    fn compile(&self, input: &Path, _config: &BuildConfig) -> Result<CompiledOutput> {
        let code = std::fs::read_to_string(input).map_err(|e| Error::Compile {
            input: input.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(CompiledOutput {
            code,
            source_map: None,
            diagnostics: Vec::new(),
        })
    }
}
