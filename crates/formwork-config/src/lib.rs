//! Build-configuration resolution for formwork.
//!
//! This crate turns the partial, author-facing site manifest into the
//! fully-populated configuration the build engine consumes: output mode,
//! base path, asset rewriting rule, and the ordered plugin pipeline.

pub mod manifest;
pub mod paths;
pub mod resolver;

pub use manifest::{Manifest, ManifestError, OutputMode, PluginDecl};
pub use resolver::{resolve, resolve_file, BuildConfig, ConfigError};
