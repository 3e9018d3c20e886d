//! Scaffold a starter manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing formwork...");

    if config.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config.display()
        );
        return Ok(());
    }

    fs::write(config, DEFAULT_MANIFEST)
        .with_context(|| format!("Failed to write {}", config.display()))?;

    tracing::info!("Created {}", config.display());
    tracing::info!("Run 'formwork check' to resolve it.");

    Ok(())
}

const DEFAULT_MANIFEST: &str = r#"# Formwork site manifest
#
# Every field is optional. Missing fields resolve to the values shown here.

# Output mode: "static" prerenders every page, "server" renders on demand
output = "static"

# URL path prefix the site is served under (empty = site root)
base = ""

# Prefix applied to root-absolute asset URLs. "." rewrites them relative to
# each page, so the built site opens directly from the filesystem.
asset_prefix = "."

# Plugins run in declaration order.
[[plugins]]
name = "css"
options = { minify = true }

[[plugins]]
name = "asset-paths"
"#;
