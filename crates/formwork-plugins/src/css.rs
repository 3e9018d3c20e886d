//! Built-in CSS plugin.
//!
//! Minifies stylesheets with lightningcss. Declared as `css` in the
//! manifest; the only option is `minify`, which defaults to true.

use std::path::Path;

use serde::Deserialize;

use crate::traits::{BuildPlugin, TransformContext, TransformError};

/// Options for the `css` plugin.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CssOptions {
    pub minify: bool,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self { minify: true }
    }
}

/// Minifies `.css` files in the build output.
#[derive(Debug, Default)]
pub struct CssPlugin {
    options: CssOptions,
}

impl CssPlugin {
    /// Create the plugin with the given options.
    pub fn new(options: CssOptions) -> Self {
        Self { options }
    }
}

impl BuildPlugin for CssPlugin {
    fn name(&self) -> &'static str {
        "css"
    }

    fn extensions(&self) -> &[&'static str] {
        &["css"]
    }

    fn transform(
        &self,
        _ctx: &TransformContext,
        _path: &Path,
        source: &str,
    ) -> Result<Option<String>, TransformError> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        if !self.options.minify {
            return Ok(None);
        }

        let stylesheet = StyleSheet::parse(source, ParserOptions::default())
            .map_err(|e| TransformError::Parse(format!("CSS parse error: {}", e)))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| TransformError::Transform(format!("CSS minify error: {}", e)))?;

        Ok(Some(minified.code))
    }
}

/// Factory for the `css` plugin, registered under that name.
pub(crate) fn factory(options: Option<toml::Value>) -> Result<Box<dyn BuildPlugin>, String> {
    let options: CssOptions = match options {
        Some(value) => value.try_into().map_err(|e| e.to_string())?,
        None => CssOptions::default(),
    };

    Ok(Box::new(CssPlugin::new(options)))
}
