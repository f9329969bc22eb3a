//! End-to-end test infrastructure for the memory dimension stack.
//!
//! Provides a shared TestHarness and helper functions for E2E tests
//! covering config file -> settings -> resolution -> update.

use std::path::PathBuf;

use memory_embeddings::{DimensionResolver, Resolution};
use memory_types::{MemoryConfig, Settings};

/// Shared test harness for E2E tests.
///
/// Owns a temp directory holding one config file.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub _temp_dir: tempfile::TempDir,
    /// Path of the config file written by `write_config`
    pub config_path: PathBuf,
}

impl TestHarness {
    /// Create a new test harness with an empty temp directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    /// Create a harness whose config file holds `toml`.
    pub fn with_config(toml: &str) -> Self {
        let harness = Self::new();
        harness.write_config(toml);
        harness
    }

    /// Overwrite the config file.
    pub fn write_config(&self, toml: &str) {
        std::fs::write(&self.config_path, toml).expect("Failed to write config file");
    }

    /// Load settings through the full layered loader.
    pub fn load_settings(&self) -> Settings {
        Settings::load(Some(&self.config_path.to_string_lossy())).expect("Failed to load settings")
    }

    /// Load settings and build the resolver the way a memory client does.
    pub fn load(&self) -> (MemoryConfig, DimensionResolver) {
        let settings = self.load_settings();
        let resolver = DimensionResolver::new().with_entries(settings.embedding_models.clone());
        (settings.memory_config(), resolver)
    }

    /// Load, resolve, and return the reconciled config with its outcome.
    pub fn load_and_resolve(&self) -> (MemoryConfig, Resolution) {
        let (mut config, resolver) = self.load();
        let resolution = resolver.resolve(&mut config);
        (config, resolution)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Config file body for one embedder section and a vector store width.
pub fn embedder_toml(provider: &str, model: Option<&str>, vector_dims: usize) -> String {
    let mut out = format!("[embedder]\nprovider = \"{}\"\n", provider);
    if let Some(model) = model {
        out.push_str(&format!("model = \"{}\"\n", model));
    }
    out.push_str(&format!(
        "\n[vector_store]\nembedding_model_dims = {}\n",
        vector_dims
    ));
    out
}

/// Assert the post-resolution invariant: store width equals embedder width
/// whenever the embedder has one.
pub fn assert_reconciled(config: &MemoryConfig) {
    if let Some(dims) = config.embedder.embedding_dims {
        assert_eq!(
            config.vector_store.embedding_model_dims, dims,
            "vector store not reconciled with embedder"
        );
    }
}
