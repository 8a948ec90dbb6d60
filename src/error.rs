use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong between receiving a translation request and
/// handing back translated code. Extraction is deliberately absent: a reply
/// without the expected markers degrades to empty output instead of failing.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation pair {0:?} is not in the expected from-to format")]
    MalformedPair(String),

    #[error("no backend is registered for translation pair {0:?}")]
    UnsupportedTranslation(String),

    #[error("unknown model {0:?}")]
    UnknownModel(String),

    #[error("{0} environment variable not set")]
    ConfigurationMissing(&'static str),

    #[error("backend {backend} is unreachable: {source}")]
    BackendUnreachable {
        backend: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend {backend} returned an unexpected reply: {detail}")]
    BackendProtocol {
        backend: &'static str,
        detail: String,
    },
}

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslateError::MalformedPair(_)
            | TranslateError::UnsupportedTranslation(_)
            | TranslateError::UnknownModel(_) => StatusCode::BAD_REQUEST,
            TranslateError::ConfigurationMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TranslateError::BackendUnreachable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            TranslateError::BackendProtocol { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Classify a reqwest transport failure for `backend`. Connection-level
    /// failures (refused, DNS, timeout) map to BackendUnreachable; anything
    /// else means the peer answered but the exchange went wrong.
    pub fn from_transport(backend: &'static str, source: reqwest::Error) -> Self {
        if source.is_connect() || source.is_timeout() {
            TranslateError::BackendUnreachable { backend, source }
        } else {
            TranslateError::BackendProtocol {
                backend,
                detail: source.to_string(),
            }
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_bad_request() {
        assert_eq!(
            TranslateError::MalformedPair("go".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TranslateError::UnsupportedTranslation("go-cobol".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TranslateError::UnknownModel("gpt5".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_configuration_names_the_variable() {
        let err = TranslateError::ConfigurationMissing("OPEN_AI_KEY");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("OPEN_AI_KEY"));
    }
}
