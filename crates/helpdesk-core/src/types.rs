use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// =============================================================================
// Time
// =============================================================================

/// Current wall-clock time as Unix epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// =============================================================================
// FAQ corpus
// =============================================================================

/// A single question/answer pair as it appears in the grouped corpus form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqQuestion {
    /// Canonical question; its whitespace-separated tokens are the match keywords.
    pub q: String,
    /// Answer text returned verbatim on a match.
    pub a: String,
}

/// A category heading and the questions filed under it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCategory {
    pub category: String,
    pub questions: Vec<FaqQuestion>,
}

/// Flattened FAQ entry. Identity is positional within the corpus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub category: String,
    pub question: String,
    pub answer: String,
}

// =============================================================================
// Sentiment
// =============================================================================

/// Emotion detected from keyword lexicons.
///
/// Declaration order is the iteration order of an emotion set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionTag {
    Frustrated,
    Urgent,
    Confused,
    Satisfied,
}

impl EmotionTag {
    /// All tags, in evaluation order.
    pub const ALL: [EmotionTag; 4] = [
        EmotionTag::Frustrated,
        EmotionTag::Urgent,
        EmotionTag::Confused,
        EmotionTag::Satisfied,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frustrated => "frustrated",
            Self::Urgent => "urgent",
            Self::Confused => "confused",
            Self::Satisfied => "satisfied",
        }
    }
}

/// Escalation risk tier derived from a sentiment score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// `score <= -3` is high, `-3 < score <= -1` is medium, anything else low.
    pub fn from_score(score: f64) -> Self {
        if score <= -3.0 {
            RiskTier::High
        } else if score <= -1.0 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Output of the sentiment classifier.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    pub score: f64,
    pub emotions: BTreeSet<EmotionTag>,
    pub escalation_risk: RiskTier,
}

impl SentimentResult {
    pub fn has(&self, tag: EmotionTag) -> bool {
        self.emotions.contains(&tag)
    }
}

// =============================================================================
// Matching and composition
// =============================================================================

/// Result of scoring a query against the FAQ corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    Matched {
        category: String,
        answer: String,
        /// Number of question keywords found in the query (always >= 2).
        confidence: usize,
    },
    NoMatch,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    /// Category of the matched entry, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            MatchResult::Matched { category, .. } => Some(category),
            MatchResult::NoMatch => None,
        }
    }
}

/// Follow-up action suggested alongside a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTag {
    EscalateToHuman,
    BrowseFaqs,
    PriorityEscalation,
    DetailedGuide,
}

// =============================================================================
// Sessions and transcripts
// =============================================================================

/// Author of a transcript turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a session transcript. Append-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub message: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    /// Present on user turns only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
}

impl Turn {
    pub fn user(message: impl Into<String>, sentiment: SentimentResult) -> Self {
        Self {
            role: Role::User,
            message: message.into(),
            timestamp: now_millis(),
            sentiment: Some(sentiment),
        }
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            message: message.into(),
            timestamp: now_millis(),
            sentiment: None,
        }
    }
}

/// Session metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    /// Epoch milliseconds.
    pub start_time: i64,
    pub message_count: u64,
    pub escalated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_time: Option<i64>,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            start_time: now_millis(),
            message_count: 0,
            escalated: false,
            escalation_reason: None,
            escalation_time: None,
        }
    }
}
