//! CSS minifier backed by lightningcss

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use crate::config::MinifySettings;
use crate::minify::{Minifier, MinifyError, OutputKind};
use crate::models::MinifyOutcome;

/// Minifies CSS by parsing and re-printing the stylesheet in compact form
#[derive(Debug, Clone, Copy, Default)]
pub struct CssMinifier;

impl CssMinifier {
    pub fn new() -> Self {
        Self
    }
}

impl Minifier for CssMinifier {
    fn output_kind(&self) -> OutputKind {
        OutputKind::Css
    }

    fn minify(
        &self,
        source: &str,
        _settings: &MinifySettings,
    ) -> Result<MinifyOutcome, MinifyError> {
        let mut sheet = StyleSheet::parse(source, ParserOptions::default())
            .map_err(|e| MinifyError(e.to_string()))?;
        sheet
            .minify(MinifyOptions::default())
            .map_err(|e| MinifyError(e.to_string()))?;
        let out = sheet
            .to_css(PrinterOptions {
                minify: true,
                ..PrinterOptions::default()
            })
            .map_err(|e| MinifyError(e.to_string()))?;

        Ok(MinifyOutcome {
            minified: out.code,
            gzip: None,
            diagnostics: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minifies_whitespace_and_semicolons() {
        let out = CssMinifier::new()
            .minify("body {\n  color: red;\n}\n", &MinifySettings::default())
            .unwrap();

        assert_eq!(out.minified, "body{color:red}");
    }

    #[test]
    fn minified_output_is_idempotent() {
        let minifier = CssMinifier::new();
        let once = minifier
            .minify(".a { margin: 0px; }", &MinifySettings::default())
            .unwrap();
        let twice = minifier
            .minify(&once.minified, &MinifySettings::default())
            .unwrap();

        assert_eq!(once.minified, twice.minified);
    }

    #[test]
    fn invalid_css_is_an_error() {
        let err = CssMinifier::new()
            .minify("body { color: ", &MinifySettings::default())
            .unwrap_err();

        assert!(!err.0.is_empty());
    }
}
