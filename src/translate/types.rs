use serde::{Deserialize, Serialize};

/// Inbound translation request. `translation` is a "from-to" pair such as
/// "go-python"; `model` optionally forces a specific backend instead of the
/// route table's pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub translation: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub translated_code: String,
    pub model_used: String,
}
