//! Batch orchestrator
//!
//! Walks a sequence of build configurations and drives each one through
//! compile → change detection → write → optional minify/gzip, firing
//! lifecycle events around every stage. Failure is isolated per
//! configuration: one bad file never aborts the batch, and `process`
//! always returns exactly one `ProcessResult` per input configuration,
//! in input order.
//!
//! Configurations run strictly one after another; the only shared mutable
//! resource is the file system, and every write is a discrete, complete
//! operation.

use std::path::Path;

use crate::compilers::{default_compilers, CompilerRegistry};
use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::events::{BuildEvent, BuildListener, ListenerRegistry};
use crate::fs;
use crate::minify::{self, default_minifiers, MinifierRegistry};
use crate::models::{CompiledOutput, ProcessResult};
use crate::resolver::CompilationUnit;

/// Drives a batch of build configurations through the pipeline.
///
/// Owns its compiler registry, minifier registry, and listener registry;
/// all three are injected at construction so there is no process-wide
/// hookup state.
pub struct ConfigFileProcessor {
    compilers: CompilerRegistry,
    minifiers: MinifierRegistry,
    listeners: ListenerRegistry,
}

impl ConfigFileProcessor {
    /// Processor with the built-in compiler and minifier registries
    pub fn new() -> Self {
        Self::with_registries(default_compilers(), default_minifiers())
    }

    /// Processor with custom registries (the pluggability seam)
    pub fn with_registries(compilers: CompilerRegistry, minifiers: MinifierRegistry) -> Self {
        Self {
            compilers,
            minifiers,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Attach a build listener. Listeners fire in attachment order.
    pub fn attach_listener(&mut self, listener: Box<dyn BuildListener>) {
        self.listeners.attach(listener);
    }

    /// Process every configuration, one after another, in input order.
    ///
    /// Never raises for a single bad input: every failure is captured into
    /// the owning configuration's result.
    pub fn process(&self, config_root: &Path, configs: &[BuildConfig]) -> Vec<ProcessResult> {
        configs
            .iter()
            .map(|config| self.process_config(config_root, config))
            .collect()
    }

    fn process_config(&self, config_root: &Path, config: &BuildConfig) -> ProcessResult {
        let mut errors = Vec::new();
        let mut has_changes = false;

        self.listeners.emit(&BuildEvent::BeforeProcess {
            config: config.clone(),
            has_changes: false,
        });

        match self.compile_unit(config_root, config, &mut has_changes) {
            Ok((unit, compiled)) => {
                self.listeners.emit(&BuildEvent::AfterProcess {
                    config: config.clone(),
                    has_changes,
                });

                if config.minify.enabled {
                    if let Err(err) = minify::post_process(
                        &unit,
                        &compiled.code,
                        config,
                        &self.minifiers,
                        &self.listeners,
                        &mut has_changes,
                    ) {
                        errors.push(err);
                    }
                }
            }
            Err(err) => errors.push(err),
        }

        self.listeners.emit(&BuildEvent::ConfigProcessed {
            config: config.clone(),
            has_changes,
        });

        ProcessResult {
            config: config.clone(),
            errors,
            has_changes,
        }
    }

    /// Compile one unit and write its output (and source map) to disk
    fn compile_unit(
        &self,
        config_root: &Path,
        config: &BuildConfig,
        has_changes: &mut bool,
    ) -> Result<(CompilationUnit, CompiledOutput)> {
        let unit = CompilationUnit::resolve(config_root, config)?;
        let compiler = self
            .compilers
            .get(unit.kind)
            .ok_or_else(|| Error::UnsupportedInput {
                input: unit.input.clone(),
            })?;

        let compiled = compiler.compile(&unit.input, config)?;

        if fs::write_if_changed(&unit.output, compiled.code.as_bytes())? {
            *has_changes = true;
        }

        if config.source_map {
            if let Some(map) = &compiled.source_map {
                let map_file = unit.source_map_file();
                let changed = fs::has_changed(&map_file, map.as_bytes())?;
                self.listeners.emit(&BuildEvent::BeforeWritingSourceMap {
                    result_file: map_file.clone(),
                    has_changes: changed,
                });
                if changed {
                    fs::write_file(&map_file, map.as_bytes())?;
                    self.listeners.emit(&BuildEvent::AfterWritingSourceMap {
                        result_file: map_file,
                    });
                    *has_changes = true;
                }
            }
        }

        Ok((unit, compiled))
    }
}

impl Default for ConfigFileProcessor {
    fn default() -> Self {
        Self::new()
    }
}
