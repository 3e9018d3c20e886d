//! Plugin pipeline composition.
//!
//! Turns an ordered list of declared plugins into live plugin instances for
//! the build engine. Factories run once per composition, so no plugin state
//! leaks between builds.

use std::fmt;
use std::sync::Arc;

use crate::traits::BuildPlugin;

/// A zero-argument producer of a plugin instance.
pub type PluginFactory = Arc<dyn Fn() -> Result<Box<dyn BuildPlugin>, String> + Send + Sync>;

/// A declared plugin: a name, a factory, and the opaque options the plugin
/// was declared with.
///
/// Specs are immutable once constructed. Cloning shares the factory, never
/// a plugin instance.
#[derive(Clone)]
pub struct PluginSpec {
    name: String,
    factory: PluginFactory,
    options: Option<toml::Value>,
}

impl PluginSpec {
    /// Create a spec from a name and a factory.
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn BuildPlugin>, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
            options: None,
        }
    }

    /// Attach the declared options, for introspection only.
    ///
    /// Options are opaque here; the factory is responsible for
    /// interpreting them.
    pub fn with_options(mut self, options: toml::Value) -> Self {
        self.options = Some(options);
        self
    }

    /// Declared plugin name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared options, if any.
    pub fn options(&self) -> Option<&toml::Value> {
        self.options.as_ref()
    }

    /// Produce a fresh plugin instance.
    pub fn instantiate(&self) -> Result<Box<dyn BuildPlugin>, String> {
        (self.factory)()
    }
}

impl fmt::Debug for PluginSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginSpec")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Errors that can occur while composing the plugin pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("Plugin '{name}' failed to initialize: {message}")]
    PluginInit { name: String, message: String },
}

/// Instantiate the declared plugins, preserving declaration order.
///
/// Each factory is invoked exactly once per call; composing again for a new
/// build yields fresh instances. If any factory fails, composition fails as
/// a whole and no pipeline is returned.
pub fn compose(specs: &[PluginSpec]) -> Result<Vec<Box<dyn BuildPlugin>>, ComposeError> {
    let mut pipeline = Vec::with_capacity(specs.len());

    for spec in specs {
        let plugin = spec
            .instantiate()
            .map_err(|message| ComposeError::PluginInit {
                name: spec.name().to_string(),
                message,
            })?;

        tracing::debug!("Initialized plugin '{}'", spec.name());
        pipeline.push(plugin);
    }

    Ok(pipeline)
}
