//! List registered plugins.

use formwork_plugins::PluginRegistry;

/// Run the plugins command.
pub fn run() {
    let registry = PluginRegistry::with_builtins();

    for name in registry.names() {
        println!("{name}");
    }
}
