//! Result types returned by [`SupportOrchestrator`](crate::SupportOrchestrator).
//!
//! These serialize with the camelCase field names clients expect.

use serde::{Deserialize, Serialize};

use helpdesk_core::types::{ActionTag, RiskTier, SentimentResult, Session, Turn};

/// Result of `init`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInit {
    pub session_id: String,
    pub message: String,
}

/// Metadata attached to a chat reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMetadata {
    pub faq_matched: bool,
    pub category: String,
    pub confidence: usize,
    pub sentiment: SentimentResult,
    pub escalation_risk: RiskTier,
    pub suggested_actions: Vec<ActionTag>,
}

/// Result of handling one user message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub metadata: ReplyMetadata,
}

/// Full transcript plus session metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHistory {
    pub history: Vec<Turn>,
    pub session: Session,
}

/// Result of escalating a session to a human agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationTicket {
    pub escalated: bool,
    pub ticket_id: String,
    pub message: String,
    pub estimated_wait_time: String,
}

/// Conversation summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    /// Milliseconds since the session started.
    pub duration: i64,
    pub message_count: u64,
    /// Distinct matched categories, in first-seen order.
    pub topics_discussed: Vec<String>,
    pub escalated: bool,
    /// Mean user-turn sentiment score; `None` when there are no user turns.
    pub overall_sentiment: Option<f64>,
    pub summary: String,
}
