//! External-tool compiler adapters
//!
//! Each supported preprocessor is driven through its own command-line tool
//! (`lessc`, `sass`, `stylus`, `coffee`). The tool runs against the input
//! with output captured into a private staging directory; the adapter reads
//! the result back and returns it, so declared output paths are never
//! touched by the adapter itself.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::compilers::{Compiler, SourceKind};
use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::models::{CompiledOutput, Diagnostic};

/// Compiler adapter wrapping an external preprocessor executable
pub struct ToolCompiler {
    kind: SourceKind,
    program: String,
}

impl ToolCompiler {
    pub fn less() -> Self {
        Self {
            kind: SourceKind::Less,
            program: "lessc".to_string(),
        }
    }

    pub fn sass() -> Self {
        Self {
            kind: SourceKind::Sass,
            program: "sass".to_string(),
        }
    }

    pub fn stylus() -> Self {
        Self {
            kind: SourceKind::Stylus,
            program: "stylus".to_string(),
        }
    }

    pub fn coffee() -> Self {
        Self {
            kind: SourceKind::Coffee,
            program: "coffee".to_string(),
        }
    }

    /// Override the executable (e.g. a pinned toolchain path)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, input: &Path, out_file: &Path, out_dir: &Path, source_map: bool) -> Command {
        let mut cmd = Command::new(&self.program);
        match self.kind {
            SourceKind::Less => {
                if source_map {
                    cmd.arg("--source-map");
                }
                cmd.arg(input).arg(out_file);
            }
            SourceKind::Sass => {
                if !source_map {
                    cmd.arg("--no-source-map");
                }
                cmd.arg(input).arg(out_file);
            }
            SourceKind::Stylus => {
                if source_map {
                    cmd.arg("--sourcemap");
                }
                cmd.arg("--out").arg(out_dir).arg(input);
            }
            SourceKind::Coffee => {
                cmd.arg("--compile");
                if source_map {
                    cmd.arg("--map");
                }
                cmd.arg("--output").arg(out_dir).arg(input);
            }
            // Plain CSS is handled by PassthroughCompiler, never here
            SourceKind::Css => {
                cmd.arg(input).arg(out_file);
            }
        }
        cmd
    }
}

impl Compiler for ToolCompiler {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn compile(&self, input: &Path, config: &BuildConfig) -> Result<CompiledOutput> {
        let staging = tempfile::tempdir()?;
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let out_file = staging
            .path()
            .join(format!("{stem}.{}", self.kind.output_extension()));

        let output = self
            .command(input, &out_file, staging.path(), config.source_map)
            .output()
            .map_err(|e| Error::Compile {
                input: input.to_path_buf(),
                message: format!("failed to run '{}': {e}", self.program),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(Error::Compile {
                input: input.to_path_buf(),
                message: stderr.trim().to_string(),
            });
        }

        let code = std::fs::read_to_string(&out_file).map_err(|_| Error::Compile {
            input: input.to_path_buf(),
            message: format!("'{}' produced no output", self.program),
        })?;

        let source_map = if config.source_map {
            let map_file = PathBuf::from(format!("{}.map", out_file.display()));
            std::fs::read_to_string(map_file).ok()
        } else {
            None
        };

        let mut diagnostics = Vec::new();
        if !stderr.trim().is_empty() {
            diagnostics.push(Diagnostic::warning(stderr.trim()));
        }

        Ok(CompiledOutput {
            code,
            source_map,
            diagnostics,
        })
    }
}
