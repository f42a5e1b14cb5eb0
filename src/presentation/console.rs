//! Console listener
//!
//! Prints one status line per pipeline stage, the way a developer watches a
//! build scroll by:
//!
//! ```text
//! Processing css/site.less
//!   Compiled
//!   Sourcemap
//!   Minified
//!   Gzipped
//! ```

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

use crate::events::{BuildEvent, BuildListener};

/// Listener rendering per-stage status lines to stdout
pub struct ConsoleListener {
    color: bool,
}

impl ConsoleListener {
    /// Colors enabled when stdout is a terminal
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Force colors on or off (tests, CI)
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn stage_line(&self, label: &str) -> String {
        format!("  {}", self.paint(label, Color::Green))
    }
}

impl Default for ConsoleListener {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildListener for ConsoleListener {
    fn on_event(&self, event: &BuildEvent) {
        match event {
            BuildEvent::BeforeProcess { config, .. } => {
                println!(
                    "Processing {}",
                    self.paint(&config.input_file.display().to_string(), Color::Cyan)
                );
            }
            BuildEvent::AfterProcess { .. } => println!("{}", self.stage_line("Compiled")),
            BuildEvent::AfterWritingSourceMap { .. } => {
                println!("{}", self.stage_line("Sourcemap"));
            }
            BuildEvent::AfterWritingMinFile { .. } => {
                println!("{}", self.stage_line("Minified"));
            }
            BuildEvent::AfterWritingGzipFile { .. } => {
                println!("{}", self.stage_line("Gzipped"));
            }
            BuildEvent::ConfigProcessed { .. } => println!(),
            // Before-write events carry no console output
            BuildEvent::BeforeWritingSourceMap { .. }
            | BuildEvent::BeforeWritingMinFile { .. }
            | BuildEvent::BeforeWritingGzipFile { .. } => {}
        }
    }
}
