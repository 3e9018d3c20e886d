//! Print the resolved configuration as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use formwork_config::{resolve, Manifest};
use formwork_plugins::PluginRegistry;

/// Run the show command.
pub fn run(config: &Path, pretty: bool) -> Result<()> {
    let manifest = if config.exists() {
        Manifest::load(config)?
    } else {
        tracing::debug!("No manifest at {}, resolving defaults", config.display());
        Manifest::default()
    };

    let registry = PluginRegistry::with_builtins();
    let resolved = resolve(manifest, &registry).context("Invalid configuration")?;

    let plugins: Vec<serde_json::Value> = resolved
        .plugins
        .iter()
        .map(|spec| {
            serde_json::json!({
                "name": spec.name(),
                "options": spec.options().and_then(|o| serde_json::to_value(o).ok()),
            })
        })
        .collect();

    let output = serde_json::json!({
        "output": resolved.output.as_str(),
        "base_path": resolved.base_path,
        "asset_prefix": resolved.asset_prefix,
        "plugins": plugins,
    });

    let rendered = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    println!("{rendered}");

    Ok(())
}
