//! The translation pipeline: ROUTE -> PROMPT -> DISPATCH -> EXTRACT.
//! Each stage short-circuits on error; extraction alone never fails and
//! instead degrades to empty or raw-passthrough output.

use tracing::{info, warn};

use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::backends::{self, ModelBackend};
use crate::translate::extract;
use crate::translate::prompt;
use crate::translate::router::BackendKind;
use crate::translate::types::{TranslationRequest, TranslationResponse};

/// Handle one translation request end to end against the application's
/// route table and configuration.
pub async fn translate_code(
    state: &AppState,
    req: &TranslationRequest,
) -> Result<TranslationResponse, TranslateError> {
    let kind = state.routes.resolve(&req.translation, req.model.as_deref())?;
    let backend = backends::create_backend(kind, &state.config, &state.http)?;
    run_pipeline(req, kind, backend.as_ref()).await
}

/// Prompt, dispatch, and extract against an already-chosen backend. Split
/// out from routing and adapter construction so tests can drive the
/// pipeline with a stub backend.
pub async fn run_pipeline(
    req: &TranslationRequest,
    kind: BackendKind,
    backend: &dyn ModelBackend,
) -> Result<TranslationResponse, TranslateError> {
    let instruction = prompt::build_prompt(kind.dialect(), &req.translation, &req.code)?;

    let raw = backend.complete(&instruction).await?;

    let translated_code = extract::extract(kind.extraction(), &raw);
    if translated_code.is_empty() {
        // Accepted degradation: the model ignored the output format. The
        // client still gets a 200 with empty code rather than an error.
        warn!(
            "Extraction found no code in {} reply for {}",
            backend.id(),
            req.translation
        );
    } else {
        info!("Code parsed from {} reply", backend.id());
    }

    Ok(TranslationResponse {
        translated_code,
        model_used: backend.id().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::translate::router::RouteTable;

    struct StubBackend {
        id: &'static str,
        reply: String,
    }

    #[async_trait]
    impl ModelBackend for StubBackend {
        fn id(&self) -> &'static str {
            self.id
        }

        async fn complete(&self, _prompt: &str) -> Result<String, TranslateError> {
            Ok(self.reply.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl ModelBackend for FailingBackend {
        fn id(&self) -> &'static str {
            "gpt4o"
        }

        async fn complete(&self, _prompt: &str) -> Result<String, TranslateError> {
            Err(TranslateError::BackendProtocol {
                backend: "gpt4o",
                detail: "status 500 Internal Server Error: boom".to_string(),
            })
        }
    }

    fn request(translation: &str, code: &str) -> TranslationRequest {
        TranslationRequest {
            translation: translation.to_string(),
            code: code.to_string(),
            model: None,
        }
    }

    #[tokio::test]
    async fn end_to_end_through_the_route_table() {
        let table = RouteTable::with_defaults();
        let req = request("go-python", "func f(){}");

        let kind = table
            .resolve(&req.translation, req.model.as_deref())
            .unwrap();
        assert_eq!(kind, BackendKind::Gpt4o);

        let backend = StubBackend {
            id: kind.id(),
            reply: "<CODE START>\ndef f(): pass\n<CODE END>".to_string(),
        };

        let resp = run_pipeline(&req, kind, &backend).await.unwrap();
        assert_eq!(resp.translated_code, "def f(): pass\n");
        assert_eq!(resp.model_used, "gpt4o");
    }

    #[tokio::test]
    async fn malformed_pair_aborts_before_dispatch() {
        let req = request("gopython", "func f(){}");
        let backend = StubBackend {
            id: "gpt4o",
            reply: String::new(),
        };

        let err = run_pipeline(&req, BackendKind::Gpt4o, &backend)
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::MalformedPair(_)));
    }

    #[tokio::test]
    async fn markerless_reply_degrades_to_empty_output() {
        let req = request("go-python", "func f(){}");
        let backend = StubBackend {
            id: "gpt4o",
            reply: "I'm sorry, I can't help with that.".to_string(),
        };

        let resp = run_pipeline(&req, BackendKind::Gpt4o, &backend)
            .await
            .unwrap();
        assert_eq!(resp.translated_code, "");
        assert_eq!(resp.model_used, "gpt4o");
    }

    #[tokio::test]
    async fn fenceless_phi_reply_passes_through_raw() {
        let req = request("c-python", "int main() {}");
        let backend = StubBackend {
            id: BackendKind::Phi2.id(),
            reply: "def main(): pass".to_string(),
        };

        let resp = run_pipeline(&req, BackendKind::Phi2, &backend)
            .await
            .unwrap();
        assert_eq!(resp.translated_code, "def main(): pass");
        assert_eq!(resp.model_used, "phi-2.7b");
    }

    #[tokio::test]
    async fn backend_failure_propagates() {
        let req = request("go-python", "func f(){}");
        let err = run_pipeline(&req, BackendKind::Gpt4o, &FailingBackend)
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::BackendProtocol { .. }));
    }
}
