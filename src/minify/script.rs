//! JS minifier driven through an external terser process
//!
//! The source is fed on stdin and the minified result read from stdout, so
//! the minifier never touches declared output paths.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::MinifySettings;
use crate::minify::{Minifier, MinifyError, OutputKind};
use crate::models::{Diagnostic, MinifyOutcome};

/// Minifies JS by piping it through `terser`
pub struct ScriptMinifier {
    program: String,
}

impl ScriptMinifier {
    pub fn new() -> Self {
        Self {
            program: "terser".to_string(),
        }
    }

    /// Override the executable (e.g. a pinned toolchain path)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for ScriptMinifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Minifier for ScriptMinifier {
    fn output_kind(&self) -> OutputKind {
        OutputKind::Js
    }

    fn minify(
        &self,
        source: &str,
        _settings: &MinifySettings,
    ) -> Result<MinifyOutcome, MinifyError> {
        let mut child = Command::new(&self.program)
            .args(["--compress", "--mangle"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| MinifyError(format!("failed to run '{}': {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| MinifyError(e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| MinifyError(e.to_string()))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(MinifyError(stderr.trim().to_string()));
        }

        let mut diagnostics = Vec::new();
        if !stderr.trim().is_empty() {
            diagnostics.push(Diagnostic::warning(stderr.trim()));
        }

        Ok(MinifyOutcome {
            minified: String::from_utf8_lossy(&output.stdout).into_owned(),
            gzip: None,
            diagnostics,
        })
    }
}
