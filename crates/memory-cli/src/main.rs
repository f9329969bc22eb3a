//! memory-dims
//!
//! Resolves the embedding width for the configured embedder and reconciles
//! the vector store with it.
//!
//! # Usage
//!
//! ```bash
//! memory-dims resolve [--provider P] [--model M] [--dims N] [--format toml|json]
//! memory-dims lookup <provider> [model]
//! memory-dims models [--provider P]
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/openmemory/config.toml)
//! 3. Environment variables (MEMORY_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use memory_cli::{list_models, lookup_dims, resolve_config, Cli, Commands, EmbedderOverrides};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            provider,
            model,
            dims,
            format,
        } => {
            resolve_config(
                cli.config.as_deref(),
                cli.log_level.as_deref(),
                EmbedderOverrides {
                    provider,
                    model,
                    dims,
                },
                format,
            )?;
        }
        Commands::Lookup { provider, model } => {
            lookup_dims(
                cli.config.as_deref(),
                cli.log_level.as_deref(),
                &provider,
                model.as_deref(),
            )?;
        }
        Commands::Models { provider } => {
            list_models(provider.as_deref())?;
        }
    }

    Ok(())
}
