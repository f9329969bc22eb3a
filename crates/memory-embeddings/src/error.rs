//! Unresolved dimension diagnostics.

use thiserror::Error;

/// Why no dimension could be determined for an embedder.
///
/// Never fatal: the caller keeps going and the embedding backend applies
/// its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnresolvedDimension {
    /// Provider is not in the catalog
    #[error("Unknown embedding provider '{0}'")]
    UnknownProvider(String),

    /// Provider is known but has neither a matching model nor a default
    #[error(
        "No dimension known for model '{}' of provider '{}'",
        .model.as_deref().unwrap_or("<none>"),
        .provider
    )]
    UnknownModel {
        provider: String,
        model: Option<String>,
    },
}
