//! Conversational core of the helpdesk.
//!
//! Provides keyword sentiment analysis, FAQ matching, response composition,
//! and the in-memory session store that ties them together per request.

pub mod composer;
pub mod error;
pub mod matcher;
pub mod orchestrator;
pub mod sentiment;
pub mod store;
pub mod types;

pub use composer::{ComposedResponse, Overlay, ResponseComposer};
pub use error::ChatError;
pub use matcher::{FaqMatcher, MATCH_THRESHOLD};
pub use orchestrator::SupportOrchestrator;
pub use sentiment::SentimentAnalyzer;
pub use store::{SessionRecord, SessionStore};
pub use types::{
    ChatReply, EscalationTicket, ReplyMetadata, SessionHistory, SessionInit, SessionSummary,
};
