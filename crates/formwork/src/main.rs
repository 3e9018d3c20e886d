//! Formwork CLI - build configuration resolver for static-site pipelines.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "formwork")]
#[command(about = "Build configuration resolver for static-site pipelines")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml manifest file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter site.toml manifest
    Init {
        /// Overwrite an existing manifest
        #[arg(short, long)]
        yes: bool,
    },

    /// Resolve the manifest and initialize the plugin pipeline
    Check,

    /// Print the resolved configuration as JSON
    Show {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List registered plugins
    Plugins,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Check => {
            commands::check::run(&cli.config)?;
        }
        Commands::Show { pretty } => {
            commands::show::run(&cli.config, pretty)?;
        }
        Commands::Plugins => {
            commands::plugins::run();
        }
    }

    Ok(())
}
