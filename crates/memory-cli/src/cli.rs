//! CLI argument parsing for memory-dims.
//!
//! CLI flags override all other config sources.

use clap::{Parser, Subcommand, ValueEnum};

/// Embedding dimension resolver
///
/// Reconciles embedder and vector store dimensions from configuration.
#[derive(Parser, Debug)]
#[command(name = "memory-dims")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/openmemory/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for the resolved configuration
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load configuration, resolve dimensions and print the result
    Resolve {
        /// Override embedder provider
        #[arg(long)]
        provider: Option<String>,

        /// Override embedder model
        #[arg(long)]
        model: Option<String>,

        /// Set explicit embedding dimensions
        #[arg(long)]
        dims: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },

    /// Look up the dimensions of a provider/model pair
    Lookup {
        /// Provider name (e.g., openai, ollama)
        provider: String,

        /// Model name
        model: Option<String>,
    },

    /// List known providers and models
    Models {
        /// Only list this provider
        #[arg(short, long)]
        provider: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_resolve_defaults() {
        let cli = Cli::parse_from(["memory-dims", "resolve"]);
        match cli.command {
            Commands::Resolve {
                provider,
                model,
                dims,
                format,
            } => {
                assert!(provider.is_none());
                assert!(model.is_none());
                assert!(dims.is_none());
                assert_eq!(format, OutputFormat::Toml);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_resolve_with_overrides() {
        let cli = Cli::parse_from([
            "memory-dims",
            "resolve",
            "--provider",
            "ollama",
            "--model",
            "bge-m3",
            "--dims",
            "1024",
            "-f",
            "json",
        ]);
        match cli.command {
            Commands::Resolve {
                provider,
                model,
                dims,
                format,
            } => {
                assert_eq!(provider.as_deref(), Some("ollama"));
                assert_eq!(model.as_deref(), Some("bge-m3"));
                assert_eq!(dims, Some(1024));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["memory-dims", "--config", "/path/to/config.toml", "resolve"]);
        assert_eq!(cli.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_cli_with_log_level() {
        let cli = Cli::parse_from(["memory-dims", "models", "--log-level", "debug"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_lookup() {
        let cli = Cli::parse_from(["memory-dims", "lookup", "gemini", "models/text-embedding-004"]);
        match cli.command {
            Commands::Lookup { provider, model } => {
                assert_eq!(provider, "gemini");
                assert_eq!(model.as_deref(), Some("models/text-embedding-004"));
            }
            _ => panic!("Expected Lookup command"),
        }
    }

    #[test]
    fn test_cli_lookup_without_model() {
        let cli = Cli::parse_from(["memory-dims", "lookup", "openai"]);
        assert!(matches!(cli.command, Commands::Lookup { model: None, .. }));
    }

    #[test]
    fn test_cli_models_filter() {
        let cli = Cli::parse_from(["memory-dims", "models", "-p", "ollama"]);
        match cli.command {
            Commands::Models { provider } => assert_eq!(provider.as_deref(), Some("ollama")),
            _ => panic!("Expected Models command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_dims() {
        let result = Cli::try_parse_from(["memory-dims", "resolve", "--dims", "wide"]);
        assert!(result.is_err());
    }
}
