//! Presentation listeners
//!
//! Subscribers for the build event bus: human-readable terminal output and
//! an NDJSON stream for CI. Neither influences orchestration; they only
//! observe.

pub mod console;
pub mod json;

pub use console::ConsoleListener;
pub use json::JsonListener;
