//! Route handler functions for all API endpoints.
//!
//! Each handler extracts path parameters or a JSON body, calls the support
//! orchestrator, and returns a JSON response.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use helpdesk_chat::{
    ChatError, ChatReply, EscalationTicket, SessionHistory, SessionInit, SessionSummary,
};
use helpdesk_core::types::{now_millis, FaqCategory};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalateRequest {
    pub session_id: String,
    #[serde(default)]
    pub reason: Option<String>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct FaqsResponse {
    pub faqs: Vec<FaqCategory>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub active_sessions: usize,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
    pub uptime_secs: u64,
}

// =============================================================================
// Session handlers
// =============================================================================

/// POST /session/init
pub async fn init_session(State(state): State<AppState>) -> Result<Json<SessionInit>, ApiError> {
    let init = state.orchestrator.init_session()?;
    Ok(Json(init))
}

/// POST /chat/message
pub async fn chat_message(
    State(state): State<AppState>,
    body: Result<Json<ChatMessageRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(req) = body?;
    match state
        .orchestrator
        .handle_message(&req.session_id, &req.message)
    {
        Ok(reply) => Ok(Json(reply)),
        Err(ChatError::SessionNotFound(_)) => Err(ApiError::NotFound(
            "Session not found. Please initialize a new session.".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// GET /session/{session_id}/history
pub async fn session_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionHistory>, ApiError> {
    let history = state.orchestrator.history(&session_id)?;
    Ok(Json(history))
}

/// POST /escalate
pub async fn escalate(
    State(state): State<AppState>,
    body: Result<Json<EscalateRequest>, JsonRejection>,
) -> Result<Json<EscalationTicket>, ApiError> {
    let Json(req) = body?;
    let ticket = state.orchestrator.escalate(&req.session_id, req.reason)?;
    Ok(Json(ticket))
}

/// POST /session/{session_id}/summary
pub async fn session_summary(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionSummary>, ApiError> {
    let summary = state.orchestrator.summarize(&session_id)?;
    Ok(Json(summary))
}

// =============================================================================
// Read-only handlers
// =============================================================================

/// GET /faqs
pub async fn faqs(State(state): State<AppState>) -> Json<FaqsResponse> {
    Json(FaqsResponse {
        faqs: state.orchestrator.faqs().to_vec(),
    })
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let active_sessions = state.orchestrator.active_sessions()?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        active_sessions,
        timestamp: now_millis(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    }))
}
