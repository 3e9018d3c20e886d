//! Named plugin registry.
//!
//! Maps plugin names to factories so manifests can declare plugins by name.
//! The registry hands out [`PluginSpec`]s with the declared options curried
//! in; it never holds plugin instances itself.

use std::collections::HashMap;
use std::sync::Arc;

use crate::composer::PluginSpec;
use crate::traits::BuildPlugin;
use crate::{asset_paths, css};

type RegisteredFactory =
    Arc<dyn Fn(Option<toml::Value>) -> Result<Box<dyn BuildPlugin>, String> + Send + Sync>;

/// Errors that can occur when looking up plugins by name.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String),
}

/// Registry of available plugin factories, keyed by name.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    factories: HashMap<String, RegisteredFactory>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry preloaded with the built-in plugins.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("css", css::factory);
        registry.register("asset-paths", asset_paths::factory);
        registry
    }

    /// Register a factory under a name, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(Option<toml::Value>) -> Result<Box<dyn BuildPlugin>, String> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Whether a plugin with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered plugin names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build a [`PluginSpec`] for a named plugin with the declared options.
    ///
    /// The options are curried into the spec's factory unparsed. A factory
    /// that rejects them surfaces the failure at composition time, not here.
    pub fn spec(
        &self,
        name: &str,
        options: Option<toml::Value>,
    ) -> Result<PluginSpec, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownPlugin(name.to_string()))?;

        let curried = options.clone();
        let mut spec = PluginSpec::new(name, move || factory(curried.clone()));

        if let Some(value) = options {
            spec = spec.with_options(value);
        }

        Ok(spec)
    }
}
