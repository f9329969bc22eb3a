//! Embedder and vector store configuration.
//!
//! A [`MemoryConfig`] pairs the embedder that produces vectors with the
//! vector store that indexes them. Both sides carry a dimension count and
//! the two must agree before either backend is constructed.

use serde::{Deserialize, Serialize};

use crate::error::MemoryError;

/// Embedder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedderConfig {
    /// Provider name (e.g., "openai", "ollama", "gemini")
    #[serde(default = "default_embedder_provider")]
    pub provider: String,

    /// Model name (e.g., "text-embedding-3-small", "nomic-embed-text")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Explicit output width. Always wins over catalog values when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_dims: Option<usize>,
}

pub(crate) fn default_embedder_provider() -> String {
    "openai".to_string()
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            provider: default_embedder_provider(),
            model: None,
            embedding_dims: None,
        }
    }
}

impl EmbedderConfig {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: None,
            embedding_dims: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_dims(mut self, dims: usize) -> Self {
        self.embedding_dims = Some(dims);
        self
    }

    /// Model name with surrounding whitespace removed, `None` if blank.
    pub fn model_name(&self) -> Option<&str> {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Vector store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorStoreConfig {
    /// Backend name (e.g., "qdrant", "chroma", "pgvector")
    #[serde(default = "default_vector_store_provider")]
    pub provider: String,

    /// Collection holding the memory vectors
    #[serde(default = "default_collection_name")]
    pub collection_name: String,

    /// Vector width the collection is created with
    #[serde(default = "default_embedding_model_dims")]
    pub embedding_model_dims: usize,
}

pub(crate) fn default_vector_store_provider() -> String {
    "qdrant".to_string()
}

pub(crate) fn default_collection_name() -> String {
    "openmemory".to_string()
}

pub(crate) fn default_embedding_model_dims() -> usize {
    1536
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            provider: default_vector_store_provider(),
            collection_name: default_collection_name(),
            embedding_model_dims: default_embedding_model_dims(),
        }
    }
}

impl VectorStoreConfig {
    pub fn with_dims(mut self, dims: usize) -> Self {
        self.embedding_model_dims = dims;
        self
    }
}

/// Embedder plus vector store, reconciled in place before client construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    #[serde(default)]
    pub embedder: EmbedderConfig,

    #[serde(default)]
    pub vector_store: VectorStoreConfig,
}

impl MemoryConfig {
    pub fn new(embedder: EmbedderConfig, vector_store: VectorStoreConfig) -> Self {
        Self {
            embedder,
            vector_store,
        }
    }

    /// True when the embedder has a width and the vector store disagrees.
    pub fn has_dimension_mismatch(&self) -> bool {
        self.embedder
            .embedding_dims
            .is_some_and(|dims| dims != self.vector_store.embedding_model_dims)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), MemoryError> {
        if self.embedder.provider.trim().is_empty() {
            return Err(MemoryError::InvalidInput(
                "embedder.provider must not be empty".to_string(),
            ));
        }
        if self.embedder.embedding_dims == Some(0) {
            return Err(MemoryError::InvalidInput(
                "embedder.embedding_dims must be > 0".to_string(),
            ));
        }
        if self.vector_store.embedding_model_dims == 0 {
            return Err(MemoryError::InvalidInput(
                "vector_store.embedding_model_dims must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Payload of a configuration update.
///
/// Each present section replaces the current one wholesale. Dimensions are
/// reconciled again after the update is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub embedder: Option<EmbedderConfig>,

    #[serde(default)]
    pub vector_store: Option<VectorStoreConfig>,
}

impl ConfigUpdate {
    /// Parse an update from a JSON request body.
    pub fn from_json(body: &str) -> Result<Self, MemoryError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn is_empty(&self) -> bool {
        self.embedder.is_none() && self.vector_store.is_none()
    }

    /// Replace the sections present in this update.
    pub fn apply_to(self, config: &mut MemoryConfig) {
        if let Some(embedder) = self.embedder {
            config.embedder = embedder;
        }
        if let Some(vector_store) = self.vector_store {
            config.vector_store = vector_store;
        }
    }
}

/// User-registered catalog entry, e.g. for a locally served model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDimsEntry {
    pub provider: String,
    pub model: String,
    pub dims: usize,
}
