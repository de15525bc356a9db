//! Axum route handlers for the AI chat API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::persona::builder::{PromptCatalog, PromptType};
use crate::persona::session::ActivePrompt;
use crate::state::AppState;

/// Key assumed when a client omits `prompt_type`. It names no variant and
/// therefore resolves to `PromptType::FALLBACK`.
pub const DEFAULT_PROMPT_KEY: &str = "default";

const LLM_NOT_CONFIGURED: &str = "DeepSeek API key not configured";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InitializeRequest {
    #[serde(default)]
    pub prompt_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    pub message: String,
    pub prompt_type: String,
    pub frontend_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct PromptListResponse {
    pub prompt_types: Vec<&'static str>,
    pub active: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/initialize
///
/// Builds the persona prompt for the requested type and makes it the single
/// active prompt for every subsequent chat, replacing whatever was there.
pub async fn handle_initialize(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<InitializeRequest>,
) -> Result<Json<InitializeResponse>, AppError> {
    let requested = request
        .prompt_type
        .unwrap_or_else(|| DEFAULT_PROMPT_KEY.to_string());

    info!("Initializing AI with prompt type: {requested}");

    if state.llm.is_none() {
        return Err(AppError::ConfigurationMissing(LLM_NOT_CONFIGURED.to_string()));
    }

    let prompt_type = PromptType::resolve(&requested);
    if prompt_type.as_str() != requested {
        debug!(
            "Unknown prompt type '{requested}', using '{}'",
            prompt_type.as_str()
        );
    }

    let frontend_url = state.config.frontend_url.clone();
    let text = state.prompts.render(prompt_type, &frontend_url);

    info!(
        "AI initialized: prompt_length={} frontend_url={frontend_url}",
        text.len()
    );

    state
        .active_prompt
        .install(ActivePrompt {
            prompt_type,
            text: Arc::from(text),
        })
        .await;

    Ok(Json(InitializeResponse {
        message: "AI initialized successfully".to_string(),
        prompt_type: requested,
        frontend_url,
    }))
}

/// POST /api/ai/chat
///
/// Sends the visitor's message with the active persona prompt to the LLM and
/// returns the completion verbatim. Requires a prior initialize call.
pub async fn handle_chat(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::InvalidRequest("Message is required".to_string()));
    }

    info!("Received user message ({} chars)", request.message.len());

    let active = state
        .active_prompt
        .current()
        .await
        .ok_or(AppError::NotInitialized)?;

    let llm = state
        .llm
        .as_ref()
        .ok_or_else(|| AppError::ConfigurationMissing(LLM_NOT_CONFIGURED.to_string()))?;

    let response = llm
        .complete(&active.text, &request.message)
        .await
        .map_err(|e| AppError::Upstream(format!("Chat error: DeepSeek API error: {e}")))?;

    debug!("AI response ({} chars)", response.len());

    Ok(Json(ChatResponse { response }))
}

/// GET /api/ai/prompts
///
/// Lists the known prompt types and the key of the active prompt, if any.
pub async fn handle_list_prompts(State(state): State<AppState>) -> Json<PromptListResponse> {
    let active = state
        .active_prompt
        .current()
        .await
        .map(|p| p.prompt_type.as_str().to_string());

    Json(PromptListResponse {
        prompt_types: PromptCatalog::available(),
        active,
    })
}
