//! Compilation unit resolver
//!
//! Turns one configuration entry into the absolute paths the pipeline
//! operates on, plus the derived sibling paths for the source map, the
//! minified copy, and the gzip copy.

use std::path::{Path, PathBuf};

use crate::compilers::SourceKind;
use crate::config::BuildConfig;
use crate::error::{Error, Result};

/// Resolved paths and compiler selection for one configuration entry
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    /// Absolute input path
    pub input: PathBuf,
    /// Absolute output path
    pub output: PathBuf,
    /// Compiler variant that applies to this unit
    pub kind: SourceKind,
}

impl CompilationUnit {
    /// Resolve a configuration entry against the configuration root.
    ///
    /// Fails with `UnsupportedInput` when no source kind is declared and
    /// none can be derived from the input extension.
    pub fn resolve(config_root: &Path, config: &BuildConfig) -> Result<Self> {
        let input = config_root.join(&config.input_file);
        let kind = config
            .source_kind()
            .ok_or_else(|| Error::UnsupportedInput {
                input: input.clone(),
            })?;

        Ok(Self {
            input,
            output: config_root.join(&config.output_file),
            kind,
        })
    }

    /// Source map sibling: `a.css` → `a.css.map`
    pub fn source_map_file(&self) -> PathBuf {
        append_extension(&self.output, "map")
    }

    /// Minified sibling: `a.css` → `a.min.css`
    pub fn min_file(&self) -> PathBuf {
        let stem = self
            .output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let name = match self.output.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{stem}.min.{ext}"),
            None => format!("{stem}.min"),
        };
        self.output.with_file_name(name)
    }

    /// Gzip sibling of the minified file: `a.min.css` → `a.min.css.gz`
    pub fn gzip_file(&self) -> PathBuf {
        append_extension(&self.min_file(), "gz")
    }
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    PathBuf::from(format!("{}.{ext}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_paths_against_config_root() {
        let config = BuildConfig::new("css/site.less", "dist/site.css");
        let unit = CompilationUnit::resolve(Path::new("/project"), &config).unwrap();

        assert_eq!(unit.input, PathBuf::from("/project/css/site.less"));
        assert_eq!(unit.output, PathBuf::from("/project/dist/site.css"));
        assert_eq!(unit.kind, SourceKind::Less);
    }

    #[test]
    fn resolve_honors_declared_compiler() {
        let mut config = BuildConfig::new("css/site.txt", "dist/site.css");
        config.compiler = Some(SourceKind::Stylus);
        let unit = CompilationUnit::resolve(Path::new("/project"), &config).unwrap();

        assert_eq!(unit.kind, SourceKind::Stylus);
    }

    #[test]
    fn resolve_unknown_extension_fails() {
        let config = BuildConfig::new("readme.txt", "dist/out.css");
        let err = CompilationUnit::resolve(Path::new("/project"), &config).unwrap_err();

        assert!(matches!(err, Error::UnsupportedInput { .. }));
    }

    #[test]
    fn derived_sibling_paths() {
        let config = BuildConfig::new("a.less", "css/a.css");
        let unit = CompilationUnit::resolve(Path::new("/p"), &config).unwrap();

        assert_eq!(unit.source_map_file(), PathBuf::from("/p/css/a.css.map"));
        assert_eq!(unit.min_file(), PathBuf::from("/p/css/a.min.css"));
        assert_eq!(unit.gzip_file(), PathBuf::from("/p/css/a.min.css.gz"));
    }

    #[test]
    fn min_file_without_extension() {
        let config = BuildConfig::new("a.less", "out/styles");
        let unit = CompilationUnit::resolve(Path::new("/p"), &config).unwrap();

        assert_eq!(unit.min_file(), PathBuf::from("/p/out/styles.min"));
    }
}
