//! Build event bus
//!
//! Named extension points fired around each pipeline stage. Listeners are
//! notification hooks, not control hooks: they receive an immutable event
//! context, are invoked in registration order, and their failures are their
//! own problem — sinks swallow internal I/O errors and must not panic.
//! Orchestration never consults a listener's outcome.

use std::path::PathBuf;

use crate::config::BuildConfig;

/// Event emitted during batch processing
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// A configuration is about to be processed. The change flag is not yet
    /// known at this point and is always `false`.
    BeforeProcess {
        config: BuildConfig,
        has_changes: bool,
    },

    /// Compilation and output write completed for a configuration
    AfterProcess {
        config: BuildConfig,
        has_changes: bool,
    },

    /// A source map write is about to be attempted
    BeforeWritingSourceMap {
        result_file: PathBuf,
        has_changes: bool,
    },

    /// A source map was written
    AfterWritingSourceMap { result_file: PathBuf },

    /// A minified file write is about to be attempted
    BeforeWritingMinFile {
        result_file: PathBuf,
        has_changes: bool,
    },

    /// A minified file was written
    AfterWritingMinFile { result_file: PathBuf },

    /// A gzip file write is about to be attempted
    BeforeWritingGzipFile {
        result_file: PathBuf,
        has_changes: bool,
    },

    /// A gzip file was written
    AfterWritingGzipFile { result_file: PathBuf },

    /// A configuration finished processing, regardless of outcome
    ConfigProcessed {
        config: BuildConfig,
        has_changes: bool,
    },
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - `ConsoleListener`: per-stage status lines in the terminal
/// - `JsonListener`: NDJSON event stream for CI
pub trait BuildListener: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: &BuildEvent);
}

/// Ordered registry of build listeners.
///
/// Owned by the orchestrator invocation; there is no ambient global
/// hookup state.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Box<dyn BuildListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Attach a listener. Listeners fire in attachment order.
    pub fn attach(&mut self, listener: Box<dyn BuildListener>) {
        self.listeners.push(listener);
    }

    /// Emit an event to every attached listener, in order
    pub fn emit(&self, event: &BuildEvent) {
        for listener in &self.listeners {
            listener.on_event(event);
        }
    }
}
