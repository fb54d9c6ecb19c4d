//! Endpoint handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use debatekit_core::{ChatRequest, GenerationRequest, PoRequest};
use serde::Serialize;
use serde_json::{Value, json};

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub ok: bool,
    pub result: String,
    pub speeches: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub ok: bool,
    pub result: String,
}

impl TextResponse {
    fn ok(result: String) -> Self {
        Self { ok: true, result }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let output = state.coach.generate(&request).await?;
    Ok(Json(GenerateResponse {
        ok: true,
        result: output.package,
        speeches: output.speeches,
    }))
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<TextResponse>, ApiError> {
    let Json(request) = payload?;
    let reply = state.coach.chat(&request).await?;
    Ok(Json(TextResponse::ok(reply)))
}

pub async fn po_assist(
    State(state): State<AppState>,
    payload: Result<Json<PoRequest>, JsonRejection>,
) -> Result<Json<TextResponse>, ApiError> {
    let Json(request) = payload?;
    let result = state.coach.po_assist(&request).await?;
    Ok(Json(TextResponse::ok(result)))
}
