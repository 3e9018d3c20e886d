//! Configuration resolution.
//!
//! Turns a partial [`Manifest`] into a fully-populated [`BuildConfig`]:
//! fills defaults, validates declared fields, and binds declared plugins to
//! registered factories. Resolution is pure and runs once per build.

use std::path::Path;

use formwork_plugins::{AssetRewrite, PluginRegistry, PluginSpec, RegistryError, TransformContext};

use crate::manifest::{Manifest, ManifestError, OutputMode};
use crate::paths;

/// Asset prefix used when the manifest declares none.
///
/// The page-relative token keeps static output openable straight from the
/// filesystem, without a server.
const DEFAULT_ASSET_PREFIX: &str = ".";

/// Errors that can occur while resolving a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Invalid base path {value:?}: {reason}")]
    BasePath { value: String, reason: String },

    #[error("Invalid asset prefix {value:?}: {reason}")]
    AssetPrefix { value: String, reason: String },

    #[error("Plugin error: {0}")]
    Plugin(#[from] RegistryError),
}

/// Fully-resolved build configuration.
///
/// Constructed once per build invocation by [`resolve`] and handed to the
/// build engine as an immutable value.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub output: OutputMode,
    pub base_path: String,
    pub asset_prefix: String,
    pub plugins: Vec<PluginSpec>,
}

impl BuildConfig {
    /// The asset URL rewriting rule derived from the resolved prefix.
    pub fn asset_rewrite(&self) -> AssetRewrite {
        AssetRewrite::from_prefix(&self.asset_prefix)
    }

    /// The context handed to plugin transform hooks.
    pub fn transform_context(&self) -> TransformContext {
        TransformContext {
            base_path: self.base_path.clone(),
            asset_rewrite: self.asset_rewrite(),
        }
    }
}

/// Resolve a manifest against a plugin registry.
///
/// Fails atomically: any invalid field or unknown plugin name means no
/// [`BuildConfig`] is produced.
pub fn resolve(manifest: Manifest, registry: &PluginRegistry) -> Result<BuildConfig, ConfigError> {
    let output = manifest.output.unwrap_or_default();
    let base_path = manifest.base.unwrap_or_default();
    let asset_prefix = manifest
        .asset_prefix
        .unwrap_or_else(|| DEFAULT_ASSET_PREFIX.to_string());

    paths::validate_base_path(&base_path).map_err(|reason| ConfigError::BasePath {
        value: base_path.clone(),
        reason,
    })?;

    paths::validate_asset_prefix(&asset_prefix).map_err(|reason| ConfigError::AssetPrefix {
        value: asset_prefix.clone(),
        reason,
    })?;

    if !output.is_static() && asset_prefix == DEFAULT_ASSET_PREFIX {
        tracing::warn!(
            "Asset prefix \".\" rewrites URLs relative to each page, which only matters for static output opened from the filesystem"
        );
    }

    let mut plugins = Vec::with_capacity(manifest.plugins.len());
    for decl in manifest.plugins {
        plugins.push(registry.spec(&decl.name, decl.options)?);
    }

    tracing::debug!(
        "Resolved configuration: output={}, base_path={:?}, asset_prefix={:?}, plugins=[{}]",
        output.as_str(),
        base_path,
        asset_prefix,
        plugins
            .iter()
            .map(PluginSpec::name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(BuildConfig {
        output,
        base_path,
        asset_prefix,
        plugins,
    })
}

/// Load a manifest file and resolve it in one step.
pub fn resolve_file(path: &Path, registry: &PluginRegistry) -> Result<BuildConfig, ConfigError> {
    let manifest = Manifest::load(path)?;
    resolve(manifest, registry)
}
