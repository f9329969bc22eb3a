//! Command implementations for memory-dims.
//!
//! Handles:
//! - resolve: Load config, apply CLI overrides, reconcile dimensions
//! - lookup: Query the catalog for one provider/model pair
//! - models: List the built-in catalog

use std::fmt::Write as _;

use anyhow::{Context, Result};
use tracing::{debug, info};

use memory_embeddings::{catalog, DimensionResolver, Resolution};
use memory_types::{ConfigUpdate, EmbedderConfig, MemoryConfig, Settings};

use crate::cli::OutputFormat;

/// CLI overrides for the embedder section.
#[derive(Debug, Default, Clone)]
pub struct EmbedderOverrides {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub dims: Option<usize>,
}

impl EmbedderOverrides {
    /// Apply overrides to `config`.
    ///
    /// A provider override replaces the whole embedder section, the same way
    /// a configuration update does, so a width from the file cannot leak
    /// onto a different provider. Model and dims alone patch the section.
    pub fn apply(self, config: &mut MemoryConfig) {
        match self.provider {
            Some(provider) => {
                let update = ConfigUpdate {
                    embedder: Some(EmbedderConfig {
                        provider,
                        model: self.model,
                        embedding_dims: self.dims,
                    }),
                    vector_store: None,
                };
                update.apply_to(config);
            }
            None => {
                if let Some(model) = self.model {
                    config.embedder.model = Some(model);
                }
                if let Some(dims) = self.dims {
                    config.embedder.embedding_dims = Some(dims);
                }
            }
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Load settings with the CLI log level applied on top.
fn load_settings(config_path: Option<&str>, log_level: Option<&str>) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;
    if let Some(level) = log_level {
        settings.log_level = level.to_string();
    }
    init_logging(&settings.log_level)?;
    debug!(
        config = config_path.unwrap_or("<default>"),
        registered = settings.embedding_models.len(),
        "Loaded settings"
    );
    Ok(settings)
}

fn resolver_for(settings: &Settings) -> DimensionResolver {
    DimensionResolver::new().with_entries(settings.embedding_models.iter().cloned())
}

/// Resolve dimensions for the configured embedder and print the result.
pub fn resolve_config(
    config_path: Option<&str>,
    log_level: Option<&str>,
    overrides: EmbedderOverrides,
    format: OutputFormat,
) -> Result<()> {
    let settings = load_settings(config_path, log_level)?;
    let resolver = resolver_for(&settings);

    let mut config = settings.memory_config();
    overrides.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let resolution = resolver.resolve(&mut config);
    info!(
        provider = %config.embedder.provider,
        outcome = %resolution,
        "Dimension resolution finished"
    );

    print!("{}", render_config(&config, format)?);
    eprintln!("{}", resolution);
    Ok(())
}

/// Serialize a config in the requested format.
pub fn render_config(config: &MemoryConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Toml => toml::to_string_pretty(config).context("Failed to render TOML"),
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(config).context("Failed to render JSON")?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Look up and print the width of a provider/model pair.
pub fn lookup_dims(
    config_path: Option<&str>,
    log_level: Option<&str>,
    provider: &str,
    model: Option<&str>,
) -> Result<()> {
    let settings = load_settings(config_path, log_level)?;
    let resolver = resolver_for(&settings);
    println!("{}", format_lookup(&resolver, provider, model));
    Ok(())
}

/// One-line lookup result, e.g. `ollama/bge-m3: 1024 (model table)`.
pub fn format_lookup(resolver: &DimensionResolver, provider: &str, model: Option<&str>) -> String {
    let label = match model {
        Some(model) => format!("{}/{}", provider, model),
        None => provider.to_string(),
    };
    match resolver.lookup(provider, model) {
        Ok((dims, source)) => format!("{}: {} ({})", label, dims, source),
        Err(reason) => format!("{}: {}", label, Resolution::Unresolved(reason)),
    }
}

/// Print the built-in catalog, optionally for one provider.
pub fn list_models(provider: Option<&str>) -> Result<()> {
    print!("{}", format_models(provider)?);
    Ok(())
}

/// Catalog listing, one provider header followed by its models.
pub fn format_models(provider: Option<&str>) -> Result<String> {
    let rows = match provider {
        Some(name) => {
            let info = catalog::provider(name)
                .with_context(|| format!("Unknown provider '{}'", name))?;
            vec![*info]
        }
        None => catalog::providers().to_vec(),
    };

    let mut out = String::new();
    for info in rows {
        match info.default_dims {
            Some(dims) => writeln!(out, "{} (default {})", info.name, dims)?,
            None => writeln!(out, "{} (no default)", info.name)?,
        }
        for model in info.models {
            writeln!(out, "  {:<48} {}", model.name, model.dims)?;
        }
    }
    Ok(out)
}
