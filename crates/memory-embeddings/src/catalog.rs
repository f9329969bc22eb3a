//! Built-in catalog of embedding widths.
//!
//! One row per provider: the widths of the models it is commonly configured
//! with, plus the width it produces when no model is named.

/// A model and the width of the vectors it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model name as passed to the provider (e.g., "text-embedding-3-small")
    pub name: &'static str,
    /// Embedding dimension
    pub dims: usize,
}

/// Catalog row for one provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderInfo {
    /// Canonical provider name (lower case, `_` separated)
    pub name: &'static str,
    /// Width used when the model is unknown or not given
    pub default_dims: Option<usize>,
    /// Known models
    pub models: &'static [ModelInfo],
}

impl ProviderInfo {
    /// Width of `model`, trying the Gemini `models/` prefix and the Ollama
    /// `:latest` tag as alternate spellings.
    pub fn model_dims(&self, model: &str) -> Option<usize> {
        model_candidates(model).find_map(|candidate| {
            self.models
                .iter()
                .find(|m| m.name == candidate)
                .map(|m| m.dims)
        })
    }
}

const fn model(name: &'static str, dims: usize) -> ModelInfo {
    ModelInfo { name, dims }
}

const OPENAI_MODELS: &[ModelInfo] = &[
    model("text-embedding-3-small", 1536),
    model("text-embedding-3-large", 3072),
    model("text-embedding-ada-002", 1536),
];

const OLLAMA_MODELS: &[ModelInfo] = &[
    model("nomic-embed-text", 768),
    model("mxbai-embed-large", 1024),
    model("all-minilm", 384),
    model("snowflake-arctic-embed", 1024),
    model("bge-m3", 1024),
];

const GEMINI_MODELS: &[ModelInfo] = &[
    model("text-embedding-004", 768),
    model("embedding-001", 768),
    model("gemini-embedding-001", 3072),
];

const VERTEXAI_MODELS: &[ModelInfo] = &[
    model("text-embedding-004", 768),
    model("text-embedding-005", 768),
    model("text-multilingual-embedding-002", 768),
];

const HUGGINGFACE_MODELS: &[ModelInfo] = &[
    model("sentence-transformers/all-MiniLM-L6-v2", 384),
    model("multi-qa-MiniLM-L6-cos-v1", 384),
    model("BAAI/bge-small-en-v1.5", 384),
    model("BAAI/bge-base-en-v1.5", 768),
    model("BAAI/bge-large-en-v1.5", 1024),
];

const TOGETHER_MODELS: &[ModelInfo] = &[
    model("togethercomputer/m2-bert-80M-8k-retrieval", 768),
    model("BAAI/bge-large-en-v1.5", 1024),
];

const AWS_BEDROCK_MODELS: &[ModelInfo] = &[
    model("amazon.titan-embed-text-v1", 1536),
    model("amazon.titan-embed-text-v2:0", 1024),
    model("cohere.embed-english-v3", 1024),
    model("cohere.embed-multilingual-v3", 1024),
];

const LMSTUDIO_MODELS: &[ModelInfo] = &[model("nomic-embed-text-v1.5", 768)];

const FASTEMBED_MODELS: &[ModelInfo] = &[
    model("BAAI/bge-small-en-v1.5", 384),
    model("thenlper/gte-large", 1024),
];

static PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        name: "openai",
        default_dims: Some(1536),
        models: OPENAI_MODELS,
    },
    ProviderInfo {
        name: "azure_openai",
        default_dims: Some(1536),
        models: OPENAI_MODELS,
    },
    ProviderInfo {
        name: "ollama",
        default_dims: Some(768),
        models: OLLAMA_MODELS,
    },
    ProviderInfo {
        name: "gemini",
        default_dims: Some(768),
        models: GEMINI_MODELS,
    },
    ProviderInfo {
        name: "vertexai",
        default_dims: Some(768),
        models: VERTEXAI_MODELS,
    },
    ProviderInfo {
        name: "huggingface",
        default_dims: Some(384),
        models: HUGGINGFACE_MODELS,
    },
    ProviderInfo {
        name: "together",
        default_dims: Some(768),
        models: TOGETHER_MODELS,
    },
    ProviderInfo {
        name: "aws_bedrock",
        default_dims: Some(1536),
        models: AWS_BEDROCK_MODELS,
    },
    // No documented default: the served model decides.
    ProviderInfo {
        name: "lmstudio",
        default_dims: None,
        models: LMSTUDIO_MODELS,
    },
    ProviderInfo {
        name: "fastembed",
        default_dims: Some(384),
        models: FASTEMBED_MODELS,
    },
];

/// All catalog rows.
pub fn providers() -> &'static [ProviderInfo] {
    PROVIDERS
}

/// Look up a provider by name. Case, surrounding whitespace and `-` vs `_`
/// are ignored.
pub fn provider(name: &str) -> Option<&'static ProviderInfo> {
    let wanted = normalize_provider(name);
    PROVIDERS.iter().find(|p| p.name == wanted)
}

/// Models known for `provider`, empty if the provider is unknown.
pub fn known_models(provider_name: &str) -> &'static [ModelInfo] {
    provider(provider_name).map(|p| p.models).unwrap_or(&[])
}

/// Canonical provider spelling: trimmed, lower case, `-` mapped to `_`.
pub fn normalize_provider(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

/// Spellings to try for a model name, most specific first.
pub(crate) fn model_candidates(model: &str) -> impl Iterator<Item = &str> {
    let trimmed = model.trim();
    let unprefixed = trimmed.strip_prefix("models/");
    let untagged = trimmed.strip_suffix(":latest");
    std::iter::once(trimmed)
        .chain(unprefixed)
        .chain(untagged)
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_names_are_canonical_and_unique() {
        for (i, p) in PROVIDERS.iter().enumerate() {
            assert_eq!(p.name, normalize_provider(p.name));
            assert!(
                PROVIDERS[i + 1..].iter().all(|other| other.name != p.name),
                "duplicate provider {}",
                p.name
            );
        }
    }

    #[test]
    fn test_all_widths_positive() {
        for p in providers() {
            assert!(p.default_dims.map_or(true, |d| d > 0), "{}", p.name);
            for m in p.models {
                assert!(m.dims > 0, "{}/{}", p.name, m.name);
            }
        }
    }

    #[test]
    fn test_provider_lookup_normalizes() {
        assert_eq!(provider("OpenAI").map(|p| p.name), Some("openai"));
        assert_eq!(provider(" azure-openai ").map(|p| p.name), Some("azure_openai"));
        assert_eq!(provider("AWS_Bedrock").map(|p| p.name), Some("aws_bedrock"));
        assert!(provider("acme").is_none());
        assert!(provider("").is_none());
    }

    #[test]
    fn test_model_dims_exact() {
        let openai = provider("openai").unwrap();
        assert_eq!(openai.model_dims("text-embedding-3-large"), Some(3072));
        assert_eq!(openai.model_dims("text-embedding-3-small"), Some(1536));
        assert_eq!(openai.model_dims("gpt-4o"), None);
    }

    #[test]
    fn test_model_dims_gemini_prefix() {
        let gemini = provider("gemini").unwrap();
        assert_eq!(gemini.model_dims("models/text-embedding-004"), Some(768));
        assert_eq!(gemini.model_dims("models/gemini-embedding-001"), Some(3072));
    }

    #[test]
    fn test_model_dims_ollama_tag() {
        let ollama = provider("ollama").unwrap();
        assert_eq!(ollama.model_dims("mxbai-embed-large:latest"), Some(1024));
        assert_eq!(ollama.model_dims(" nomic-embed-text "), Some(768));
        // Only `:latest` is stripped; other tags may change the width.
        assert_eq!(ollama.model_dims("nomic-embed-text:v1.5"), None);
    }

    #[test]
    fn test_bedrock_model_with_version_colon() {
        let bedrock = provider("aws_bedrock").unwrap();
        assert_eq!(bedrock.model_dims("amazon.titan-embed-text-v2:0"), Some(1024));
    }

    #[test]
    fn test_known_models() {
        assert_eq!(known_models("together").len(), 2);
        assert!(known_models("acme").is_empty());
    }

    #[test]
    fn test_lmstudio_has_no_default() {
        assert_eq!(provider("lmstudio").unwrap().default_dims, None);
    }
}
