pub mod nvidia;
pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::config::{self, Config};
use crate::error::TranslateError;
use crate::translate::router::BackendKind;

pub use nvidia::NvidiaLlamaBackend;
pub use ollama::OllamaBackend;
pub use openai::OpenAiChatBackend;

/// A model backend: send prompt text, receive the model's raw reply text.
/// Adapters differ only in wire shape; prompt phrasing and reply parsing are
/// handled outside this trait.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    fn id(&self) -> &'static str;

    async fn complete(&self, prompt: &str) -> Result<String, TranslateError>;
}

/// Reply shape shared by the chat-completion style APIs (OpenAI, NVIDIA).
#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionReply {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatReplyMessage {
    pub content: String,
}

/// Create the adapter for `kind`, checking its required configuration up
/// front. A missing variable fails here, before any network call is made.
pub fn create_backend(
    kind: BackendKind,
    config: &Config,
    client: &reqwest::Client,
) -> Result<Box<dyn ModelBackend>, TranslateError> {
    info!("Initializing backend: {}", kind.id());

    match kind {
        BackendKind::Gpt4o => {
            let api_key = config
                .open_ai_key
                .clone()
                .ok_or(TranslateError::ConfigurationMissing(config::OPEN_AI_KEY))?;
            Ok(Box::new(OpenAiChatBackend::new(api_key, client.clone())))
        }
        BackendKind::Llama32 => {
            let url = config
                .nvidia_llama_url
                .clone()
                .ok_or(TranslateError::ConfigurationMissing(
                    config::NVIDIA_LLAMA_URL,
                ))?;
            let api_key = config
                .nvidia_api_key
                .clone()
                .ok_or(TranslateError::ConfigurationMissing(config::NVIDIA_API_KEY))?;
            Ok(Box::new(NvidiaLlamaBackend::new(url, api_key, client.clone())))
        }
        BackendKind::DeepSeekCoder => {
            let url = config
                .ollama_url
                .clone()
                .ok_or(TranslateError::ConfigurationMissing(config::OLLAMA_URL))?;
            Ok(Box::new(OllamaBackend::deepseek_coder(url, client.clone())))
        }
        BackendKind::Phi2 => {
            let url = config
                .ollama_url
                .clone()
                .ok_or(TranslateError::ConfigurationMissing(config::OLLAMA_URL))?;
            Ok(Box::new(OllamaBackend::phi(url, client.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_config() -> Config {
        Config::default()
    }

    #[test]
    fn missing_openai_key_fails_before_any_call() {
        let err = create_backend(
            BackendKind::Gpt4o,
            &empty_config(),
            &reqwest::Client::new(),
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            TranslateError::ConfigurationMissing("OPEN_AI_KEY")
        ));
    }

    #[test]
    fn missing_nvidia_config_names_each_variable() {
        let client = reqwest::Client::new();

        let err = create_backend(BackendKind::Llama32, &empty_config(), &client)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            TranslateError::ConfigurationMissing("NVIDIA_LLAMA_URL")
        ));

        let config = Config {
            nvidia_llama_url: Some("https://integrate.api.nvidia.com/v1/chat/completions".into()),
            ..Config::default()
        };
        let err = create_backend(BackendKind::Llama32, &config, &client)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            TranslateError::ConfigurationMissing("NVIDIA_API_KEY")
        ));
    }

    #[test]
    fn missing_ollama_url_fails_for_both_local_models() {
        let client = reqwest::Client::new();
        for kind in [BackendKind::DeepSeekCoder, BackendKind::Phi2] {
            let err = create_backend(kind, &empty_config(), &client).err().unwrap();
            assert!(matches!(
                err,
                TranslateError::ConfigurationMissing("OLLAMA_URL")
            ));
        }
    }

    #[test]
    fn configured_backends_report_their_ids() {
        let client = reqwest::Client::new();
        let config = Config {
            open_ai_key: Some("sk-test".into()),
            nvidia_llama_url: Some("https://example.test/v1/chat/completions".into()),
            nvidia_api_key: Some("nvapi-test".into()),
            ollama_url: Some("http://localhost:11434/api/generate".into()),
            ..Config::default()
        };

        for (kind, id) in [
            (BackendKind::Gpt4o, "gpt4o"),
            (BackendKind::Llama32, "llama-3.2-3b"),
            (BackendKind::DeepSeekCoder, "deepseek-6.7b"),
            (BackendKind::Phi2, "phi-2.7b"),
        ] {
            let backend = create_backend(kind, &config, &client).unwrap();
            assert_eq!(backend.id(), id);
        }
    }
}
