//! Site manifest parsing.
//!
//! The manifest (`site.toml`) is the partial, author-facing form of the
//! build configuration. Every field is optional; the resolver fills in
//! defaults and validates the result.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// How the site is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Prerender every page to static files.
    #[default]
    Static,
    /// Render pages on demand in a server runtime.
    Server,
}

impl OutputMode {
    /// Check if this mode prerenders to static files.
    pub fn is_static(self) -> bool {
        matches!(self, Self::Static)
    }

    /// Get the mode's manifest spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Server => "server",
        }
    }
}

/// A plugin declared in the manifest: a name and optional options table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginDecl {
    pub name: String,

    #[serde(default)]
    pub options: Option<toml::Value>,
}

impl PluginDecl {
    /// Declare a plugin by name, with no options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
        }
    }

    /// Attach an options table to the declaration.
    pub fn with_options(mut self, options: toml::Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// Partial build configuration as authored in `site.toml`.
///
/// An empty manifest is valid; it resolves to the all-defaults
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Output mode (defaults to static)
    #[serde(default)]
    pub output: Option<OutputMode>,

    /// URL path prefix the site is served under
    #[serde(default)]
    pub base: Option<String>,

    /// Prefix applied to root-absolute asset URLs
    #[serde(default)]
    pub asset_prefix: Option<String>,

    /// Plugins to run, in order
    #[serde(default)]
    pub plugins: Vec<PluginDecl>,
}

impl Manifest {
    /// Parse a manifest from TOML source.
    pub fn from_toml(source: &str) -> Result<Self, ManifestError> {
        toml::from_str(source).map_err(|e| ManifestError::InvalidToml(e.to_string()))
    }

    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ManifestError::Read(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&content)
    }
}

/// Errors that can occur when reading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Read(String),

    #[error("Invalid TOML in manifest: {0}")]
    InvalidToml(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_full_manifest() {
        let source = r#"
output = "static"
base = "/docs"
asset_prefix = "."

[[plugins]]
name = "css"
options = { minify = true }

[[plugins]]
name = "asset-paths"
"#;

        let manifest = Manifest::from_toml(source).unwrap();

        assert_eq!(manifest.output, Some(OutputMode::Static));
        assert_eq!(manifest.base.as_deref(), Some("/docs"));
        assert_eq!(manifest.asset_prefix.as_deref(), Some("."));
        assert_eq!(manifest.plugins.len(), 2);
        assert_eq!(manifest.plugins[0].name, "css");
        assert!(manifest.plugins[0].options.is_some());
        assert_eq!(manifest.plugins[1].name, "asset-paths");
        assert!(manifest.plugins[1].options.is_none());
    }

    #[test]
    fn empty_manifest_is_valid() {
        let manifest = Manifest::from_toml("").unwrap();

        assert!(manifest.output.is_none());
        assert!(manifest.base.is_none());
        assert!(manifest.asset_prefix.is_none());
        assert!(manifest.plugins.is_empty());
    }

    #[test]
    fn parses_server_output_mode() {
        let manifest = Manifest::from_toml(r#"output = "server""#).unwrap();

        assert_eq!(manifest.output, Some(OutputMode::Server));
    }

    #[test]
    fn rejects_unknown_output_modes() {
        let result = Manifest::from_toml(r#"output = "hybrid""#);

        assert!(matches!(result, Err(ManifestError::InvalidToml(_))));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = Manifest::from_toml("base = ");

        assert!(matches!(result, Err(ManifestError::InvalidToml(_))));
    }

    #[test]
    fn plugin_without_name_is_an_error() {
        let result = Manifest::from_toml("[[plugins]]\noptions = { minify = true }");

        assert!(matches!(result, Err(ManifestError::InvalidToml(_))));
    }

    #[test]
    fn loads_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, r#"base = "/docs""#).unwrap();

        let manifest = Manifest::load(&path).unwrap();

        assert_eq!(manifest.base.as_deref(), Some("/docs"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = Manifest::load(Path::new("does-not-exist.toml"));

        assert!(matches!(result, Err(ManifestError::Read(_))));
    }
}
