use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use super::{ChatCompletionReply, ModelBackend};
use crate::error::TranslateError;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const BACKEND_ID: &str = "gpt4o";

/// Hosted chat adapter: sends the prompt as a single user-role message to
/// the OpenAI chat-completions endpoint.
pub struct OpenAiChatBackend {
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl OpenAiChatBackend {
    pub fn new(api_key: String, client: reqwest::Client) -> Self {
        Self { api_key, client }
    }
}

#[async_trait]
impl ModelBackend for OpenAiChatBackend {
    fn id(&self) -> &'static str {
        BACKEND_ID
    }

    async fn complete(&self, prompt: &str) -> Result<String, TranslateError> {
        info!("OpenAI: building and sending chat completion");

        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslateError::from_transport(BACKEND_ID, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::from_transport(BACKEND_ID, e))?;

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
