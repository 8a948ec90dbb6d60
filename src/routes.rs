use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::info;

use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::service;
use crate::translate::types::{TranslationRequest, TranslationResponse};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/translate", post(translate))
        .route("/health", get(health_check))
        .route("/hello", get(hello))
}

async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>, TranslateError> {
    info!("Translation request received: {}", req.translation);
    let resp = service::translate_code(&state, &req).await?;
    Ok(Json(resp))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn hello() -> &'static str {
    "hello"
}
