//! Plugin capability interface and pipeline composition for formwork.
//!
//! This crate defines the [`BuildPlugin`] trait that build plugins implement,
//! the registry that maps manifest plugin names to factories, and the
//! composer that turns declared plugins into a live pipeline.

pub mod asset_paths;
pub mod composer;
pub mod css;
pub mod registry;
pub mod traits;

pub use asset_paths::AssetPathsPlugin;
pub use composer::{compose, ComposeError, PluginFactory, PluginSpec};
pub use css::{CssOptions, CssPlugin};
pub use registry::{PluginRegistry, RegistryError};
pub use traits::{AssetRewrite, BuildPlugin, TransformContext, TransformError};
