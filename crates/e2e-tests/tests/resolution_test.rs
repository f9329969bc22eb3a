//! Resolution E2E tests.
//!
//! Config files are loaded through the layered settings loader and run
//! through the resolver exactly as a memory client does at startup.

use pretty_assertions::assert_eq;

use e2e_tests::{assert_reconciled, embedder_toml, TestHarness};
use memory_embeddings::{catalog, DimensionSource, Resolution, UnresolvedDimension};

/// Every catalog model loaded from a file ends up at its table width.
#[test]
fn test_catalog_models_from_config_file() {
    let harness = TestHarness::new();

    for provider in catalog::providers() {
        for model in provider.models {
            harness.write_config(&embedder_toml(provider.name, Some(model.name), 1));
            let (config, resolution) = harness.load_and_resolve();

            assert_eq!(resolution.dims(), Some(model.dims), "{}/{}", provider.name, model.name);
            assert_eq!(config.embedder.embedding_dims, Some(model.dims));
            assert_reconciled(&config);
        }
    }
}

/// Ollama with nomic-embed-text against a store left at the 1536 default.
#[test]
fn test_ollama_overrides_default_store_width() {
    let harness = TestHarness::with_config(
        r#"
[embedder]
provider = "ollama"
model = "nomic-embed-text:latest"
"#,
    );

    let (config, resolution) = harness.load_and_resolve();

    assert_eq!(
        resolution,
        Resolution::Resolved {
            dims: 768,
            source: DimensionSource::ModelTable,
            vector_store_updated: true,
        }
    );
    assert_eq!(config.vector_store.embedding_model_dims, 768);
    assert_eq!(config.vector_store.collection_name, "openmemory");
}

/// A width written in the file wins over the catalog.
#[test]
fn test_explicit_dims_in_file() {
    let harness = TestHarness::with_config(
        r#"
[embedder]
provider = "openai"
model = "text-embedding-3-large"
embedding_dims = 1024

[vector_store]
embedding_model_dims = 3072
"#,
    );

    let (config, resolution) = harness.load_and_resolve();

    assert_eq!(resolution.dims(), Some(1024));
    assert_eq!(config.embedder.embedding_dims, Some(1024));
    assert_eq!(config.vector_store.embedding_model_dims, 1024);
}

/// Gemini's `models/` prefix resolves like the bare name.
#[test]
fn test_gemini_prefixed_model() {
    let harness = TestHarness::with_config(&embedder_toml(
        "gemini",
        Some("models/gemini-embedding-001"),
        768,
    ));

    let (config, resolution) = harness.load_and_resolve();

    assert_eq!(resolution.dims(), Some(3072));
    assert_reconciled(&config);
}

/// Registered entries from the file extend the catalog.
#[test]
fn test_registered_models_from_file() {
    let harness = TestHarness::with_config(
        r#"
[embedder]
provider = "lmstudio"
model = "text-embedding-qwen3-embedding-0.6b"

[[embedding_models]]
provider = "lmstudio"
model = "text-embedding-qwen3-embedding-0.6b"
dims = 1024
"#,
    );

    let (config, resolution) = harness.load_and_resolve();

    assert_eq!(
        resolution,
        Resolution::Resolved {
            dims: 1024,
            source: DimensionSource::ModelTable,
            vector_store_updated: true,
        }
    );
    assert_reconciled(&config);
}

/// Unknown providers produce an outcome, never a panic or error.
#[test]
fn test_unknown_provider_is_not_fatal() {
    let harness = TestHarness::with_config(&embedder_toml("acme", Some("acme-embed"), 1536));

    let (config, resolution) = harness.load_and_resolve();

    assert_eq!(
        resolution,
        Resolution::Unresolved(UnresolvedDimension::UnknownProvider("acme".to_string()))
    );
    assert_eq!(config.embedder.embedding_dims, None);
    assert_eq!(config.vector_store.embedding_model_dims, 1536);
}

/// Resolving an already resolved config changes nothing.
#[test]
fn test_resolution_idempotent_after_load() {
    let harness = TestHarness::with_config(&embedder_toml("huggingface", None, 1536));
    let (mut config, resolver) = harness.load();

    let first = resolver.resolve(&mut config);
    let snapshot = config.clone();
    let second = resolver.resolve(&mut config);

    assert_eq!(first.dims(), Some(384));
    assert_eq!(
        second,
        Resolution::Resolved {
            dims: 384,
            source: DimensionSource::Explicit,
            vector_store_updated: false,
        }
    );
    assert_eq!(config, snapshot);
}
