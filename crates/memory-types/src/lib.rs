//! # memory-types
//!
//! Configuration types for the memory embedder stack.
//!
//! - Embedder and vector store sections, reconciled before client construction
//! - Configuration updates that replace whole sections
//! - Layered settings loading (defaults, file, env)
//!
//! ## Usage
//!
//! ```rust
//! use memory_types::{EmbedderConfig, MemoryConfig, VectorStoreConfig};
//!
//! let config = MemoryConfig::new(
//!     EmbedderConfig::new("ollama").with_model("nomic-embed-text"),
//!     VectorStoreConfig::default(),
//! );
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod memory;

pub use config::{default_config_path, Settings, ENV_PREFIX};
pub use error::MemoryError;
pub use memory::{ConfigUpdate, EmbedderConfig, MemoryConfig, ModelDimsEntry, VectorStoreConfig};
