//! Support orchestrator: central coordinator wiring the analyzer, matcher,
//! composer, and session store.
//!
//! Every inbound message runs sentiment analysis, then FAQ matching, then
//! composition against the session's prior transcript length, and finally
//! appends the user and assistant turns.

use std::sync::Arc;

use rand::distr::Alphanumeric;
use rand::Rng;
use tracing::{debug, info, warn};

use helpdesk_core::config::ChatConfig;
use helpdesk_core::corpus::FaqCorpus;
use helpdesk_core::types::{now_millis, ActionTag, FaqCategory, Role, Turn};

use crate::composer::ResponseComposer;
use crate::error::ChatError;
use crate::matcher::FaqMatcher;
use crate::sentiment::SentimentAnalyzer;
use crate::store::SessionStore;
use crate::types::{
    ChatReply, EscalationTicket, ReplyMetadata, SessionHistory, SessionInit, SessionSummary,
};

const TICKET_PREFIX: &str = "TICKET-";
const TICKET_SUFFIX_LEN: usize = 9;

/// Central support orchestrator. Cheap to share behind an `Arc`.
pub struct SupportOrchestrator {
    analyzer: SentimentAnalyzer,
    matcher: FaqMatcher,
    composer: ResponseComposer,
    store: SessionStore,
    config: ChatConfig,
}

impl SupportOrchestrator {
    /// Create an orchestrator over the given corpus.
    pub fn new(corpus: FaqCorpus, config: ChatConfig) -> Self {
        Self {
            analyzer: SentimentAnalyzer::new(),
            matcher: FaqMatcher::new(Arc::new(corpus)),
            composer: ResponseComposer::new(),
            store: SessionStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Grouped FAQ corpus, in corpus order.
    pub fn faqs(&self) -> &[FaqCategory] {
        self.matcher.corpus().categories()
    }

    pub fn active_sessions(&self) -> Result<usize, ChatError> {
        self.store.len()
    }

    /// Start a new session and return its id with the welcome message.
    pub fn init_session(&self) -> Result<SessionInit, ChatError> {
        let session = self.store.init()?;
        info!(session_id = %session.id, "Session initialized");
        Ok(SessionInit {
            session_id: session.id,
            message: self.config.welcome_message.clone(),
        })
    }

    /// Handle one user message.
    ///
    /// Unknown sessions fail before anything is recorded.
    pub fn handle_message(&self, session_id: &str, message: &str) -> Result<ChatReply, ChatError> {
        if !self.store.contains(session_id)? {
            warn!(session_id, "Message for unknown session");
            return Err(ChatError::SessionNotFound(session_id.to_string()));
        }

        let sentiment = self.analyzer.analyze(message);
        let faq_match = self.matcher.find(message);

        let composed = self.store.update(session_id, |record| {
            let composed =
                self.composer
                    .compose(record.transcript().len(), &faq_match, &sentiment);

            record.append(Turn::user(message, sentiment.clone()));
            record.append(Turn::assistant(composed.message.clone()));
            record.record_message();
            if composed.has_action(ActionTag::PriorityEscalation) {
                record.mark_escalated();
            }
            composed
        })?;

        debug!(
            session_id,
            category = %composed.category,
            confidence = composed.confidence,
            score = sentiment.score,
            risk = sentiment.escalation_risk.as_str(),
            "Message handled"
        );
        if composed.has_action(ActionTag::PriorityEscalation) {
            info!(session_id, "Session flagged for priority escalation");
        }

        Ok(ChatReply {
            response: composed.message,
            metadata: ReplyMetadata {
                faq_matched: composed.faq_matched,
                category: composed.category,
                confidence: composed.confidence,
                escalation_risk: sentiment.escalation_risk,
                sentiment,
                suggested_actions: composed.suggested_actions,
            },
        })
    }

    /// Transcript and session metadata for a session.
    pub fn history(&self, session_id: &str) -> Result<SessionHistory, ChatError> {
        let record = self.store.get(session_id)?;
        Ok(SessionHistory {
            history: record.transcript().to_vec(),
            session: record.session().clone(),
        })
    }

    /// Hand a session to a human agent and issue a ticket id.
    pub fn escalate(
        &self,
        session_id: &str,
        reason: Option<String>,
    ) -> Result<EscalationTicket, ChatError> {
        self.store.update(session_id, |record| record.escalate(reason))?;

        let ticket_id = generate_ticket_id();
        info!(session_id, ticket_id = %ticket_id, "Session escalated to human agent");

        Ok(EscalationTicket {
            escalated: true,
            message: format!(
                "Your case has been escalated to a human agent. Ticket ID: {}",
                ticket_id
            ),
            ticket_id,
            estimated_wait_time: self.config.estimated_wait_time.clone(),
        })
    }

    /// Summarize the topics, sentiment, and outcome of a session.
    pub fn summarize(&self, session_id: &str) -> Result<SessionSummary, ChatError> {
        let record = self.store.get(session_id)?;
        let session = record.session();

        let user_turns: Vec<&Turn> = record
            .transcript()
            .iter()
            .filter(|t| t.role == Role::User)
            .collect();

        let mut topics: Vec<String> = Vec::new();
        for turn in &user_turns {
            if let Some(category) = self.matcher.find(&turn.message).category() {
                if !topics.iter().any(|t| t == category) {
                    topics.push(category.to_string());
                }
            }
        }

        let overall_sentiment = if user_turns.is_empty() {
            None
        } else {
            let total: f64 = user_turns
                .iter()
                .map(|t| t.sentiment.as_ref().map(|s| s.score).unwrap_or(0.0))
                .sum();
            Some(total / user_turns.len() as f64)
        };

        let summary = summary_text(&topics, session.escalated);

        Ok(SessionSummary {
            session_id: session.id.clone(),
            duration: now_millis() - session.start_time,
            message_count: session.message_count,
            topics_discussed: topics,
            escalated: session.escalated,
            overall_sentiment,
            summary,
        })
    }
}

fn summary_text(topics: &[String], escalated: bool) -> String {
    let subject = if topics.is_empty() {
        "general support".to_string()
    } else {
        topics.join(", ")
    };
    let outcome = if escalated {
        "Case was escalated to human support."
    } else {
        "Issue resolved via FAQ."
    };
    format!("Customer inquired about {}. {}", subject, outcome)
}

/// `TICKET-` followed by nine random uppercase alphanumerics.
fn generate_ticket_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(TICKET_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();
    format!("{}{}", TICKET_PREFIX, suffix)
}

// =============================================================================
// Tests
// =============================================================================
