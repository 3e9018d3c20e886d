//! Validate the manifest and initialize the plugin pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use formwork_config::resolve_file;
use formwork_plugins::{compose, PluginRegistry};

/// Run the check command.
pub fn run(config: &Path) -> Result<()> {
    if !config.exists() {
        anyhow::bail!(
            "Manifest not found: {}. Run 'formwork init' first.",
            config.display()
        );
    }

    let registry = PluginRegistry::with_builtins();
    let resolved = resolve_file(config, &registry).context("Invalid configuration")?;
    let pipeline = compose(&resolved.plugins).context("Failed to initialize plugins")?;

    tracing::info!("Configuration is valid");
    tracing::info!("Output mode: {}", resolved.output.as_str());
    tracing::info!("Base path: {:?}", resolved.base_path);
    tracing::info!("Asset prefix: {:?}", resolved.asset_prefix);

    if pipeline.is_empty() {
        tracing::info!("No plugins declared");
    } else {
        let names: Vec<&str> = pipeline.iter().map(|p| p.name()).collect();
        tracing::info!(
            "Initialized {} plugin(s): {}",
            pipeline.len(),
            names.join(", ")
        );
    }

    Ok(())
}
