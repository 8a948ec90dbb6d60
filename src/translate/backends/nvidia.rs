use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use super::{ChatCompletionReply, ModelBackend};
use crate::error::TranslateError;

const BACKEND_ID: &str = "llama-3.2-3b";

/// Hosted inference adapter for llama-3.2-3b-instruct behind the NVIDIA
/// API. Uses bearer-token auth and conservative sampling parameters tuned
/// for code output.
pub struct NvidiaLlamaBackend {
    url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    model: &'a str,
    messages: Vec<InferenceMessage<'a>>,
    stream: bool,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    presence_penalty: f32,
    frequency_penalty: f32,
}

#[derive(Debug, Serialize)]
struct InferenceMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl NvidiaLlamaBackend {
    pub fn new(url: String, api_key: String, client: reqwest::Client) -> Self {
        Self {
            url,
            api_key,
            client,
        }
    }
}

#[async_trait]
impl ModelBackend for NvidiaLlamaBackend {
    fn id(&self) -> &'static str {
        BACKEND_ID
    }

    async fn complete(&self, prompt: &str) -> Result<String, TranslateError> {
        info!("NVIDIA: sending inference request to {}", self.url);

        let request = InferenceRequest {
            model: "meta/llama-3.2-3b-instruct",
            messages: vec![InferenceMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
            max_tokens: 1024,
            temperature: 0.2,
            top_p: 0.7,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslateError::from_transport(BACKEND_ID, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::from_transport(BACKEND_ID, e))?;

        // The API is expected to explain refusals in the body, so keep it
        // verbatim in the error.
        if !status.is_success() {
            return Err(TranslateError::BackendProtocol {
                backend: BACKEND_ID,
                detail: format!("status {status}: {body}"),
            });
        }

        let reply: ChatCompletionReply =
            serde_json::from_str(&body).map_err(|e| TranslateError::BackendProtocol {
                backend: BACKEND_ID,
                detail: format!("{e}; payload: {body}"),
            })?;

        let choice = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::BackendProtocol {
                backend: BACKEND_ID,
                detail: format!("reply contained no choices; payload: {body}"),
            })?;

        Ok(choice.message.content)
    }
}
