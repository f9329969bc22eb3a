//! Settings loading for the memory embedder stack.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/openmemory/config.toml.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::MemoryError;
use crate::memory::{
    default_collection_name, default_embedder_provider, default_embedding_model_dims,
    default_vector_store_provider, EmbedderConfig, MemoryConfig, ModelDimsEntry,
    VectorStoreConfig,
};

/// Environment variable prefix, e.g. `MEMORY_EMBEDDER__MODEL`.
pub const ENV_PREFIX: &str = "MEMORY";

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Embedder configuration
    #[serde(default)]
    pub embedder: EmbedderConfig,

    /// Vector store configuration
    #[serde(default)]
    pub vector_store: VectorStoreConfig,

    /// Extra model dimensions not covered by the built-in catalog
    #[serde(default)]
    pub embedding_models: Vec<ModelDimsEntry>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            embedder: EmbedderConfig::default(),
            vector_store: VectorStoreConfig::default(),
            embedding_models: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/openmemory/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (MEMORY_*, nested keys split on `__`)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, MemoryError> {
        let mut builder = Config::builder()
            // 1. Built-in defaults
            .set_default("log_level", default_log_level())?
            .set_default("embedder.provider", default_embedder_provider())?
            .set_default("vector_store.provider", default_vector_store_provider())?
            .set_default("vector_store.collection_name", default_collection_name())?
            .set_default(
                "vector_store.embedding_model_dims",
                default_embedding_model_dims() as i64,
            )?
            // 2. Default config file
            .add_source(File::with_name(&default_config_path().to_string_lossy()).required(false));

        // 3. CLI-specified config file (higher precedence than default)
        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // 4. Environment variables
        // Format: MEMORY_LOG_LEVEL, MEMORY_EMBEDDER__PROVIDER,
        // MEMORY_VECTOR_STORE__EMBEDDING_MODEL_DIMS
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config
            .try_deserialize()
            .map_err(|e| MemoryError::Config(e.to_string()))
    }

    /// The embedder/vector store pair the resolver reconciles.
    pub fn memory_config(&self) -> MemoryConfig {
        MemoryConfig::new(self.embedder.clone(), self.vector_store.clone())
    }
}

/// Config file location without extension; the loader probes known formats.
pub fn default_config_path() -> PathBuf {
    ProjectDirs::from("", "", "openmemory")
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config")
}
