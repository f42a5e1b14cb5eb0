//! Webforge CLI - configuration-driven web asset compiler
//!
//! Usage: webforge <CONFIG> [FILE] [--json]
//!
//! Reads the configuration file, optionally narrows it to a single input
//! (exact path or *.ext), runs the batch, prints every captured error, and
//! exits 0 when no configuration failed, 1 otherwise (2 on usage or
//! config-load failures).

mod cli;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use webforge::{filter_configs, load_configs, ConfigFileProcessor, ConsoleListener, JsonListener};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            2
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<i32> {
    let color = std::io::stdout().is_terminal();

    let mut configs = load_configs(&cli.config)?;
    if let Some(pattern) = &cli.file {
        configs = filter_configs(configs, pattern);
    }

    if configs.is_empty() {
        let message = "No configurations matched";
        if color {
            println!("{}", message.yellow());
        } else {
            println!("{message}");
        }
        return Ok(0);
    }

    let config_root = cli.config.parent().unwrap_or(Path::new("."));

    let mut processor = ConfigFileProcessor::new();
    if cli.json {
        processor.attach_listener(Box::new(JsonListener::stdout()));
    } else {
        processor.attach_listener(Box::new(ConsoleListener::new()));
    }

    let results = processor.process(config_root, &configs);

    let mut failed = false;
    for result in results.iter().filter(|r| r.has_errors()) {
        failed = true;
        for error in &result.errors {
            let message = error.to_string();
            if color {
                eprintln!("{}", message.red());
            } else {
                eprintln!("{message}");
            }
        }
    }

    Ok(if failed { 1 } else { 0 })
}
