//! JSON listener
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::events::{BuildEvent, BuildListener};

/// Listener that outputs NDJSON events to stdout
pub struct JsonListener {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonListener {
    /// Create a new JSON listener writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON listener writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildListener for JsonListener {
    fn on_event(&self, event: &BuildEvent) {
        let json = match event {
            BuildEvent::BeforeProcess { config, .. } => serde_json::json!({
                "event": "before_process",
                "input": config.input_file.display().to_string(),
                "output": config.output_file.display().to_string(),
            }),

            BuildEvent::AfterProcess {
                config,
                has_changes,
            } => serde_json::json!({
                "event": "compiled",
                "input": config.input_file.display().to_string(),
                "has_changes": has_changes,
            }),

            BuildEvent::BeforeWritingSourceMap {
                result_file,
                has_changes,
            } => serde_json::json!({
                "event": "before_writing_source_map",
                "path": result_file.display().to_string(),
                "has_changes": has_changes,
            }),

            BuildEvent::AfterWritingSourceMap { result_file } => serde_json::json!({
                "event": "source_map_written",
                "path": result_file.display().to_string(),
            }),

            BuildEvent::BeforeWritingMinFile {
                result_file,
                has_changes,
            } => serde_json::json!({
                "event": "before_writing_min_file",
                "path": result_file.display().to_string(),
                "has_changes": has_changes,
            }),

            BuildEvent::AfterWritingMinFile { result_file } => serde_json::json!({
                "event": "min_file_written",
                "path": result_file.display().to_string(),
            }),

            BuildEvent::BeforeWritingGzipFile {
                result_file,
                has_changes,
            } => serde_json::json!({
                "event": "before_writing_gzip_file",
                "path": result_file.display().to_string(),
                "has_changes": has_changes,
            }),

            BuildEvent::AfterWritingGzipFile { result_file } => serde_json::json!({
                "event": "gzip_file_written",
                "path": result_file.display().to_string(),
            }),

            BuildEvent::ConfigProcessed {
                config,
                has_changes,
            } => serde_json::json!({
                "event": "config_processed",
                "input": config.input_file.display().to_string(),
                "has_changes": has_changes,
            }),
        };

        self.write_event(json);
    }
}
