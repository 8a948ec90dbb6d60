use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ModelBackend;
use crate::error::TranslateError;

/// Local inference adapter for models served by an Ollama instance. One
/// struct covers both locally-tuned models; they share the endpoint and
/// differ only in the model name sent in the payload.
pub struct OllamaBackend {
    id: &'static str,
    model: &'static str,
    url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateReply {
    response: String,
}

impl OllamaBackend {
    /// deepseek-coder:6.7b. Needs a fair amount of RAM to run locally.
    pub fn deepseek_coder(url: String, client: reqwest::Client) -> Self {
        Self {
            id: "deepseek-6.7b",
            model: "deepseek-coder:6.7b",
            url,
            client,
        }
    }

    /// phi:2.7b, the small fallback model.
    pub fn phi(url: String, client: reqwest::Client) -> Self {
        Self {
            id: "phi-2.7b",
            model: "phi:2.7b",
            url,
            client,
        }
    }
}

#[async_trait]
impl ModelBackend for OllamaBackend {
    fn id(&self) -> &'static str {
        self.id
    }

    async fn complete(&self, prompt: &str) -> Result<String, TranslateError> {
        info!("Ollama: generating with {} at {}", self.model, self.url);

        let request = GenerateRequest {
            model: self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslateError::from_transport(self.id, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::from_transport(self.id, e))?;

        if !status.is_success() {
            return Err(TranslateError::BackendProtocol {
                backend: self.id,
                detail: format!("status {status}: {body}"),
            });
        }

        let reply: GenerateReply =
            serde_json::from_str(&body).map_err(|e| TranslateError::BackendProtocol {
                backend: self.id,
                detail: format!("{e}; payload: {body}"),
            })?;

        Ok(reply.response)
    }
}
