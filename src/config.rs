//! Build configuration model and loader
//!
//! A configuration file is a JSON array of mappings, one per compiled
//! output:
//!
//! ```json
//! [
//!   {
//!     "outputFile": "css/site.css",
//!     "inputFile": "css/site.less",
//!     "minify": { "enabled": true, "gzip": true },
//!     "sourceMap": false
//!   }
//! ]
//! ```
//!
//! The loader reads the file once up front; the batch orchestrator only
//! consumes the resulting sequence and never re-reads the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compilers::SourceKind;
use crate::error::{Error, Result};

/// One declared input→output compilation mapping plus post-processing options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Source file, relative to the configuration root
    pub input_file: PathBuf,

    /// Output file, relative to the configuration root
    pub output_file: PathBuf,

    /// Explicit source kind; derived from the input extension when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<SourceKind>,

    /// Minify/gzip settings for the post-process stage
    #[serde(default)]
    pub minify: MinifySettings,

    /// Whether to write the compiler's source map next to the output
    #[serde(default)]
    pub source_map: bool,

    /// Per-compiler options, passed through to the adapter opaquely
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub options: serde_json::Map<String, serde_json::Value>,
}

impl BuildConfig {
    /// Create a config with default post-processing settings
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input.into(),
            output_file: output.into(),
            compiler: None,
            minify: MinifySettings::default(),
            source_map: false,
            options: serde_json::Map::new(),
        }
    }

    /// Effective source kind: the declared discriminator, or the kind
    /// derived from the input file's extension
    pub fn source_kind(&self) -> Option<SourceKind> {
        self.compiler.or_else(|| SourceKind::from_path(&self.input_file))
    }
}

/// Settings for the minify/compress stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifySettings {
    /// Whether the stage runs at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Whether to also write a gzip copy of the minified output
    #[serde(default)]
    pub gzip: bool,

    /// Format-specific minifier options, passed through opaquely
    #[serde(flatten)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

fn default_enabled() -> bool {
    true
}

impl Default for MinifySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            gzip: false,
            options: serde_json::Map::new(),
        }
    }
}

/// Load all configurations from a JSON configuration file
pub fn load_configs(path: &Path) -> Result<Vec<BuildConfig>> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path)?;
    let configs: Vec<BuildConfig> =
        serde_json::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    for config in &configs {
        validate(config)?;
    }

    Ok(configs)
}

fn validate(config: &BuildConfig) -> Result<()> {
    if config.input_file.as_os_str().is_empty() {
        return Err(Error::InvalidConfig {
            message: format!(
                "empty inputFile for output '{}'",
                config.output_file.display()
            ),
        });
    }
    if config.output_file.as_os_str().is_empty() {
        return Err(Error::InvalidConfig {
            message: format!(
                "empty outputFile for input '{}'",
                config.input_file.display()
            ),
        });
    }
    Ok(())
}

/// Keep only configurations matching a single-file filter.
///
/// A `*.ext` pattern matches by input extension; anything else is an exact,
/// case-insensitive match on the declared input path.
pub fn filter_configs(configs: Vec<BuildConfig>, pattern: &str) -> Vec<BuildConfig> {
    if let Some(ext) = pattern.strip_prefix('*') {
        configs
            .into_iter()
            .filter(|c| {
                c.input_file
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| format!(".{e}").eq_ignore_ascii_case(ext))
            })
            .collect()
    } else {
        configs
            .into_iter()
            .filter(|c| {
                c.input_file
                    .to_string_lossy()
                    .eq_ignore_ascii_case(pattern)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const FULL_CONFIG: &str = r#"[
        {
            "outputFile": "css/site.css",
            "inputFile": "css/site.less",
            "minify": { "enabled": true, "gzip": true },
            "sourceMap": true
        },
        {
            "outputFile": "js/app.js",
            "inputFile": "js/app.coffee",
            "minify": { "enabled": false }
        }
    ]"#;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compilerconfig.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn load_configs_parses_full_file() {
        let (_dir, path) = write_config(FULL_CONFIG);
        let configs = load_configs(&path).unwrap();

        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].input_file, PathBuf::from("css/site.less"));
        assert_eq!(configs[0].output_file, PathBuf::from("css/site.css"));
        assert!(configs[0].minify.enabled);
        assert!(configs[0].minify.gzip);
        assert!(configs[0].source_map);
        assert!(!configs[1].minify.enabled);
        assert!(!configs[1].minify.gzip);
        assert!(!configs[1].source_map);
    }

    #[test]
    fn minify_defaults_to_enabled_without_gzip() {
        let (_dir, path) = write_config(
            r#"[{ "outputFile": "a.css", "inputFile": "a.less" }]"#,
        );
        let configs = load_configs(&path).unwrap();

        assert!(configs[0].minify.enabled);
        assert!(!configs[0].minify.gzip);
    }

    #[test]
    fn minify_enabled_defaults_true_when_object_present() {
        let (_dir, path) = write_config(
            r#"[{ "outputFile": "a.css", "inputFile": "a.less", "minify": { "gzip": true } }]"#,
        );
        let configs = load_configs(&path).unwrap();

        assert!(configs[0].minify.enabled);
        assert!(configs[0].minify.gzip);
    }

    #[test]
    fn unknown_minify_keys_are_preserved() {
        let (_dir, path) = write_config(
            r#"[{ "outputFile": "a.css", "inputFile": "a.less", "minify": { "termSemicolons": true } }]"#,
        );
        let configs = load_configs(&path).unwrap();

        assert_eq!(
            configs[0].minify.options.get("termSemicolons"),
            Some(&serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn source_kind_derived_from_extension() {
        let config = BuildConfig::new("css/site.less", "css/site.css");
        assert_eq!(config.source_kind(), Some(SourceKind::Less));
    }

    #[test]
    fn declared_compiler_overrides_extension() {
        let mut config = BuildConfig::new("styles/site.txt", "styles/site.css");
        config.compiler = Some(SourceKind::Sass);
        assert_eq!(config.source_kind(), Some(SourceKind::Sass));
    }

    #[test]
    fn load_configs_missing_file() {
        let err = load_configs(&PathBuf::from("/nonexistent/compilerconfig.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn load_configs_malformed_json() {
        let (_dir, path) = write_config("not json at all");
        let err = load_configs(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn load_configs_rejects_empty_paths() {
        let (_dir, path) =
            write_config(r#"[{ "outputFile": "", "inputFile": "a.less" }]"#);
        let err = load_configs(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn filter_exact_match_is_case_insensitive() {
        let configs = vec![
            BuildConfig::new("css/site.less", "css/site.css"),
            BuildConfig::new("js/app.coffee", "js/app.js"),
        ];

        let filtered = filter_configs(configs, "CSS/Site.LESS");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].input_file, PathBuf::from("css/site.less"));
    }

    #[test]
    fn filter_wildcard_matches_by_extension() {
        let configs = vec![
            BuildConfig::new("css/site.less", "css/site.css"),
            BuildConfig::new("css/admin.less", "css/admin.css"),
            BuildConfig::new("js/app.coffee", "js/app.js"),
        ];

        let filtered = filter_configs(configs, "*.less");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn filter_no_match_returns_empty() {
        let configs = vec![BuildConfig::new("css/site.less", "css/site.css")];
        assert!(filter_configs(configs, "*.styl").is_empty());
    }
}
