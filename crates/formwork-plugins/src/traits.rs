//! Trait definitions for build pipeline plugins.

use std::path::Path;

/// The asset URL rewriting rule derived from the resolved asset prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRewrite {
    /// Rewrite every asset URL relative to the emitting page's own
    /// directory, so the output opens directly from the filesystem.
    RelativeToPage,

    /// Prepend a fixed prefix (a URL path or a CDN origin). An empty
    /// prefix leaves URLs untouched.
    Prefix(String),
}

impl AssetRewrite {
    /// Derive the rewriting rule from a resolved asset prefix string.
    pub fn from_prefix(prefix: &str) -> Self {
        if prefix == "." {
            Self::RelativeToPage
        } else {
            Self::Prefix(prefix.to_string())
        }
    }

    /// Check if applying this rule never changes a URL.
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Prefix(prefix) if prefix.is_empty())
    }

    /// Rewrite a single asset URL.
    ///
    /// Only root-absolute URLs are rewritten. Relative URLs, full URLs,
    /// protocol-relative URLs, and fragments pass through unchanged.
    pub fn apply(&self, url: &str) -> String {
        if !url.starts_with('/') || url.starts_with("//") {
            return url.to_string();
        }

        match self {
            Self::RelativeToPage => format!(".{url}"),
            Self::Prefix(prefix) => format!("{prefix}{url}"),
        }
    }
}

impl Default for AssetRewrite {
    fn default() -> Self {
        Self::Prefix(String::new())
    }
}

/// Resolved settings handed to plugin hooks by the build engine.
#[derive(Debug, Clone, Default)]
pub struct TransformContext {
    /// Public URL prefix under which pages are served
    pub base_path: String,

    /// Asset URL rewriting rule in effect for this build
    pub asset_rewrite: AssetRewrite,
}

/// Errors that can occur inside a plugin transform hook.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Transform error: {0}")]
    Transform(String),
}

/// Trait for build-time transformation plugins.
///
/// The build engine composes a pipeline of these once per build and calls
/// [`transform`](BuildPlugin::transform) for each emitted file whose
/// extension matches. Plugins observe transformations made by earlier
/// pipeline entries.
pub trait BuildPlugin: Send + Sync {
    /// Plugin identifier (e.g., "css")
    fn name(&self) -> &'static str;

    /// File extensions this plugin transforms
    fn extensions(&self) -> &[&'static str];

    /// Transform one emitted file's contents.
    ///
    /// Returns `Ok(None)` when the file is left untouched.
    ///
    /// # Arguments
    /// * `ctx` - Resolved settings for this build
    /// * `path` - Output path of the file being transformed
    /// * `source` - Current contents of the file
    fn transform(
        &self,
        ctx: &TransformContext,
        path: &Path,
        source: &str,
    ) -> Result<Option<String>, TransformError>;
}
