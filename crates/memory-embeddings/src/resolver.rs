//! Embedding dimension resolution.
//!
//! Determines the vector width for an embedder and reconciles it into the
//! paired vector store before either is constructed. Priority:
//! 1. Explicit `embedding_dims` on the embedder
//! 2. Registered or built-in (provider, model) entry
//! 3. Provider default
//! 4. Nothing found: config left as is, warning logged

use std::collections::HashMap;
use std::fmt;

use memory_types::{ConfigUpdate, MemoryConfig, ModelDimsEntry};
use tracing::{debug, info, warn};

use crate::catalog::{self, model_candidates, normalize_provider};
use crate::error::UnresolvedDimension;

/// Where a resolved width came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionSource {
    /// Set by the user on the embedder
    Explicit,
    /// Matched a (provider, model) entry
    ModelTable,
    /// Provider default, model unknown or not given
    ProviderDefault,
}

impl fmt::Display for DimensionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DimensionSource::Explicit => "explicit",
            DimensionSource::ModelTable => "model table",
            DimensionSource::ProviderDefault => "provider default",
        };
        f.write_str(name)
    }
}

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved {
        dims: usize,
        source: DimensionSource,
        /// The vector store width was overwritten to match
        vector_store_updated: bool,
    },
    Unresolved(UnresolvedDimension),
}

impl Resolution {
    pub fn dims(&self) -> Option<usize> {
        match self {
            Resolution::Resolved { dims, .. } => Some(*dims),
            Resolution::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Resolved {
                dims,
                source,
                vector_store_updated,
            } => {
                write!(f, "{} dimensions ({})", dims, source)?;
                if *vector_store_updated {
                    f.write_str(", vector store updated")?;
                }
                Ok(())
            }
            Resolution::Unresolved(reason) => write!(f, "unresolved: {}", reason),
        }
    }
}

/// Resolves embedding widths from the built-in catalog plus registered
/// entries.
///
/// Immutable once built, so one instance can serve every client
/// construction and config update.
#[derive(Debug, Clone, Default)]
pub struct DimensionResolver {
    /// provider (canonical) -> model -> dims
    registered: HashMap<String, HashMap<String, usize>>,
}

impl DimensionResolver {
    /// Resolver backed by the built-in catalog only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a (provider, model) width. Registered entries shadow the
    /// built-in catalog.
    pub fn with_model(mut self, provider: &str, model: &str, dims: usize) -> Self {
        self.register(provider, model, dims);
        self
    }

    /// Register every entry, e.g. from `Settings::embedding_models`.
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = ModelDimsEntry>,
    {
        for entry in entries {
            self.register(&entry.provider, &entry.model, entry.dims);
        }
        self
    }

    fn register(&mut self, provider: &str, model: &str, dims: usize) {
        let model = model.trim();
        if dims == 0 || model.is_empty() {
            warn!(provider, model, dims, "Ignoring invalid embedding model entry");
            return;
        }
        self.registered
            .entry(normalize_provider(provider))
            .or_default()
            .insert(model.to_string(), dims);
    }

    /// Number of registered entries.
    pub fn registered_len(&self) -> usize {
        self.registered.values().map(HashMap::len).sum()
    }

    /// Catalog lookup without consulting any explicit width.
    pub fn lookup(
        &self,
        provider: &str,
        model: Option<&str>,
    ) -> Result<(usize, DimensionSource), UnresolvedDimension> {
        let canonical = normalize_provider(provider);
        let model = model.map(str::trim).filter(|m| !m.is_empty());
        let registered = self.registered.get(&canonical);

        if let (Some(models), Some(model)) = (registered, model) {
            if let Some(dims) = model_candidates(model).find_map(|c| models.get(c).copied()) {
                return Ok((dims, DimensionSource::ModelTable));
            }
        }

        let Some(info) = catalog::provider(&canonical) else {
            return Err(if registered.is_some() {
                UnresolvedDimension::UnknownModel {
                    provider: provider.to_string(),
                    model: model.map(str::to_string),
                }
            } else {
                UnresolvedDimension::UnknownProvider(provider.to_string())
            });
        };

        if let Some(dims) = model.and_then(|m| info.model_dims(m)) {
            return Ok((dims, DimensionSource::ModelTable));
        }

        info.default_dims
            .map(|dims| (dims, DimensionSource::ProviderDefault))
            .ok_or_else(|| UnresolvedDimension::UnknownModel {
                provider: provider.to_string(),
                model: model.map(str::to_string),
            })
    }

    /// Determine the embedding width and reconcile it into both sections.
    ///
    /// On success the embedder's `embedding_dims` holds the width and the
    /// vector store matches it. When nothing is known the config is left
    /// untouched and a warning is logged. Never fails.
    pub fn resolve(&self, config: &mut MemoryConfig) -> Resolution {
        let (dims, source) = match config.embedder.embedding_dims {
            Some(dims) => (dims, DimensionSource::Explicit),
            None => match self.lookup(&config.embedder.provider, config.embedder.model_name()) {
                Ok(found) => found,
                Err(reason) => {
                    warn!(
                        provider = %config.embedder.provider,
                        model = config.embedder.model_name().unwrap_or(""),
                        vector_store_dims = config.vector_store.embedding_model_dims,
                        "{}; using backend default embedding dimensions",
                        reason
                    );
                    return Resolution::Unresolved(reason);
                }
            },
        };

        debug!(
            provider = %config.embedder.provider,
            dims,
            %source,
            "Resolved embedding dimensions"
        );
        config.embedder.embedding_dims = Some(dims);

        let vector_store_updated = config.vector_store.embedding_model_dims != dims;
        if vector_store_updated {
            info!(
                from = config.vector_store.embedding_model_dims,
                to = dims,
                collection = %config.vector_store.collection_name,
                "Updating vector store dimensions to match embedder"
            );
            config.vector_store.embedding_model_dims = dims;
        }

        Resolution::Resolved {
            dims,
            source,
            vector_store_updated,
        }
    }

    /// Apply a configuration update, then reconcile dimensions again.
    pub fn apply_update(&self, config: &mut MemoryConfig, update: ConfigUpdate) -> Resolution {
        update.apply_to(config);
        self.resolve(config)
    }
}
