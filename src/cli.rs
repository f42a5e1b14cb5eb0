use std::path::PathBuf;

use clap::Parser;

/// Webforge - configuration-driven web asset compiler
#[derive(Parser, Debug)]
#[command(name = "webforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the build configuration file (JSON)
    pub config: PathBuf,

    /// Only process configurations matching this input file
    /// (exact path, or *.ext to match by extension)
    pub file: Option<String>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,
}
