use std::collections::HashMap;

use tracing::info;

use crate::error::TranslateError;
use crate::translate::extract::ExtractionStrategy;
use crate::translate::prompt::PromptDialect;

/// The model backends this gateway knows how to talk to. Each carries its
/// wire identifier plus the prompt dialect and extraction strategy that work
/// best for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// OpenAI hosted chat completion.
    Gpt4o,
    /// llama-3.2-3b-instruct served through the NVIDIA inference API.
    Llama32,
    /// deepseek-coder:6.7b served by a local Ollama instance.
    DeepSeekCoder,
    /// phi:2.7b served by a local Ollama instance. Weak at following
    /// delimiter instructions, hence the plain dialect and fence scanning.
    Phi2,
}

impl BackendKind {
    pub fn id(self) -> &'static str {
        match self {
            BackendKind::Gpt4o => "gpt4o",
            BackendKind::Llama32 => "llama-3.2-3b",
            BackendKind::DeepSeekCoder => "deepseek-6.7b",
            BackendKind::Phi2 => "phi-2.7b",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "gpt4o" => Some(BackendKind::Gpt4o),
            "llama-3.2-3b" => Some(BackendKind::Llama32),
            "deepseek-6.7b" => Some(BackendKind::DeepSeekCoder),
            "phi-2.7b" => Some(BackendKind::Phi2),
            _ => None,
        }
    }

    pub fn dialect(self) -> PromptDialect {
        match self {
            BackendKind::Phi2 => PromptDialect::Plain,
            _ => PromptDialect::Delimited,
        }
    }

    pub fn extraction(self) -> ExtractionStrategy {
        match self {
            BackendKind::Phi2 => ExtractionStrategy::Fenced,
            _ => ExtractionStrategy::Delimited,
        }
    }
}

/// Immutable mapping from translation pair to the backend best known for it.
/// Built once at startup and passed in explicitly so tests can substitute
/// alternate tables.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, BackendKind>,
}

impl RouteTable {
    pub fn new(routes: HashMap<String, BackendKind>) -> Self {
        Self { routes }
    }

    /// The default routing table. Every backend is reachable from at least
    /// one pair so none of them depends on an explicit override.
    pub fn with_defaults() -> Self {
        let mut routes = HashMap::new();
        routes.insert("go-python".to_string(), BackendKind::Gpt4o);
        routes.insert("python-go".to_string(), BackendKind::Gpt4o);
        routes.insert("javascript-python".to_string(), BackendKind::Llama32);
        routes.insert("python-javascript".to_string(), BackendKind::Llama32);
        routes.insert("java-python".to_string(), BackendKind::DeepSeekCoder);
        routes.insert("python-java".to_string(), BackendKind::DeepSeekCoder);
        routes.insert("cpp-python".to_string(), BackendKind::DeepSeekCoder);
        routes.insert("c-python".to_string(), BackendKind::Phi2);
        Self::new(routes)
    }

    /// Pick the backend for `pair`. An explicit `model` override wins over
    /// the table; an override naming a backend we do not know is rejected
    /// distinctly from a pair that simply has no table entry.
    pub fn resolve(
        &self,
        pair: &str,
        model: Option<&str>,
    ) -> Result<BackendKind, TranslateError> {
        if let Some(id) = model {
            let kind = BackendKind::from_id(id)
                .ok_or_else(|| TranslateError::UnknownModel(id.to_string()))?;
            info!("Model override: using {} for {}", kind.id(), pair);
            return Ok(kind);
        }

        let kind = self
            .routes
            .get(pair)
            .copied()
            .ok_or_else(|| TranslateError::UnsupportedTranslation(pair.to_string()))?;
        info!("Translation supported: using {} for {}", kind.id(), pair);
        Ok(kind)
    }
}
