//! Built-in asset path plugin.
//!
//! Rewrites root-absolute asset URLs in HTML output according to the
//! resolved asset rewrite rule, so a site built for a subpath or a CDN
//! still references its own assets.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::traits::{BuildPlugin, TransformContext, TransformError};

// Match: href="/..." or src='/...'. The attribute name must follow
// whitespace so prefixed names like data-src stay untouched.
static ASSET_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\s)(href|src)=(?:"(/[^"]*)"|'(/[^']*)')"#)
        .expect("Invalid asset attribute regex")
});

/// Rewrites `href`/`src` attributes in `.html` files.
#[derive(Debug, Default)]
pub struct AssetPathsPlugin;

impl AssetPathsPlugin {
    /// Create the plugin. It has no options.
    pub fn new() -> Self {
        Self
    }
}

impl BuildPlugin for AssetPathsPlugin {
    fn name(&self) -> &'static str {
        "asset-paths"
    }

    fn extensions(&self) -> &[&'static str] {
        &["html"]
    }

    fn transform(
        &self,
        ctx: &TransformContext,
        _path: &Path,
        source: &str,
    ) -> Result<Option<String>, TransformError> {
        if ctx.asset_rewrite.is_identity() {
            return Ok(None);
        }

        let rewritten = ASSET_ATTR_RE.replace_all(source, |caps: &regex::Captures<'_>| {
            if let Some(url) = caps.get(3) {
                // Double-quoted value
                format!(
                    r#"{}{}="{}""#,
                    &caps[1],
                    &caps[2],
                    ctx.asset_rewrite.apply(url.as_str())
                )
            } else {
                // Single-quoted value
                format!(
                    "{}{}='{}'",
                    &caps[1],
                    &caps[2],
                    ctx.asset_rewrite.apply(&caps[4])
                )
            }
        });

        if rewritten == source {
            Ok(None)
        } else {
            Ok(Some(rewritten.into_owned()))
        }
    }
}

/// Factory for the `asset-paths` plugin, registered under that name.
pub(crate) fn factory(options: Option<toml::Value>) -> Result<Box<dyn BuildPlugin>, String> {
    match options {
        None => Ok(Box::new(AssetPathsPlugin::new())),
        Some(value) if value.as_table().is_some_and(toml::Table::is_empty) => {
            Ok(Box::new(AssetPathsPlugin::new()))
        }
        Some(_) => Err("The asset-paths plugin takes no options".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::AssetRewrite;
    use pretty_assertions::assert_eq;

    fn relative_ctx() -> TransformContext {
        TransformContext {
            base_path: String::new(),
            asset_rewrite: AssetRewrite::RelativeToPage,
        }
    }

    #[test]
    fn targets_html_files() {
        let plugin = AssetPathsPlugin::new();

        assert_eq!(plugin.name(), "asset-paths");
        assert_eq!(plugin.extensions(), ["html"]);
    }

    #[test]
    fn rewrites_root_absolute_attributes() {
        let html = r#"<link href="/styles/main.css"><img src="/img/logo.png">"#;

        let plugin = AssetPathsPlugin::new();
        let rewritten = plugin
            .transform(&relative_ctx(), Path::new("index.html"), html)
            .unwrap()
            .unwrap();

        assert_eq!(
            rewritten,
            r#"<link href="./styles/main.css"><img src="./img/logo.png">"#
        );
    }

    #[test]
    fn rewrites_single_quoted_attributes() {
        let html = "<img src='/img/logo.png'>";

        let plugin = AssetPathsPlugin::new();
        let rewritten = plugin
            .transform(&relative_ctx(), Path::new("index.html"), html)
            .unwrap()
            .unwrap();

        assert_eq!(rewritten, "<img src='./img/logo.png'>");
    }

    #[test]
    fn ignores_prefixed_attribute_names() {
        let html = r#"<img data-src="/img/lazy.png" src="logo.png">"#;

        let plugin = AssetPathsPlugin::new();
        let result = plugin
            .transform(&relative_ctx(), Path::new("index.html"), html)
            .unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn applies_fixed_prefixes() {
        let html = r#"<script src="/js/app.js"></script>"#;
        let ctx = TransformContext {
            base_path: "/docs".to_string(),
            asset_rewrite: AssetRewrite::Prefix("https://cdn.example.com".to_string()),
        };

        let plugin = AssetPathsPlugin::new();
        let rewritten = plugin
            .transform(&ctx, Path::new("index.html"), html)
            .unwrap()
            .unwrap();

        assert_eq!(
            rewritten,
            r#"<script src="https://cdn.example.com/js/app.js"></script>"#
        );
    }

    #[test]
    fn leaves_relative_and_external_urls_alone() {
        let html = r#"<a href="about.html"><img src="https://example.com/a.png"><img src="//cdn.example.com/b.png">"#;

        let plugin = AssetPathsPlugin::new();
        let result = plugin
            .transform(&relative_ctx(), Path::new("index.html"), html)
            .unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn identity_rewrite_is_a_no_op() {
        let html = r#"<link href="/styles/main.css">"#;
        let ctx = TransformContext::default();

        let plugin = AssetPathsPlugin::new();
        let result = plugin.transform(&ctx, Path::new("index.html"), html).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn matches_attributes_case_insensitively() {
        let html = r#"<IMG SRC="/img/logo.png">"#;

        let plugin = AssetPathsPlugin::new();
        let rewritten = plugin
            .transform(&relative_ctx(), Path::new("index.html"), html)
            .unwrap()
            .unwrap();

        assert_eq!(rewritten, r#"<IMG SRC="./img/logo.png">"#);
    }

    #[test]
    fn factory_rejects_options() {
        let options: toml::Value = toml::from_str("eager = true").unwrap();

        assert!(factory(Some(options)).is_err());
        assert!(factory(None).is_ok());
    }
}
