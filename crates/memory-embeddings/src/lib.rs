//! # memory-embeddings
//!
//! Embedding dimension resolution for the memory stack.
//!
//! Before a memory client builds its embedder and vector store, the vector
//! width must be known and both sides must agree on it. This crate looks the
//! width up from the embedder's provider and model and writes it into both
//! configuration sections.
//!
//! ## Features
//! - Built-in catalog of common providers and models
//! - User-registered entries that shadow the catalog
//! - Unknown providers are logged, never fatal
//!
//! ## Usage
//!
//! ```rust
//! use memory_embeddings::{DimensionResolver, Resolution};
//! use memory_types::{EmbedderConfig, MemoryConfig, VectorStoreConfig};
//!
//! let mut config = MemoryConfig::new(
//!     EmbedderConfig::new("ollama").with_model("nomic-embed-text"),
//!     VectorStoreConfig::default(),
//! );
//! let resolution = DimensionResolver::new().resolve(&mut config);
//! assert_eq!(resolution.dims(), Some(768));
//! assert_eq!(config.vector_store.embedding_model_dims, 768);
//! ```

pub mod catalog;
pub mod error;
pub mod resolver;

pub use catalog::{ModelInfo, ProviderInfo};
pub use error::UnresolvedDimension;
pub use resolver::{DimensionResolver, DimensionSource, Resolution};
