//! Keyword sentiment analysis.
//!
//! Scores a message by counting lexicon phrases found anywhere in its
//! lower-cased text. Each emotion contributes `weight * hits` to the score,
//! and the total determines the escalation risk tier.

use std::collections::BTreeSet;

use helpdesk_core::types::{EmotionTag, RiskTier, SentimentResult};

// =============================================================================
// Lexicons
// =============================================================================

struct Lexicon {
    tag: EmotionTag,
    weight: f64,
    keywords: &'static [&'static str],
}

static LEXICONS: &[Lexicon] = &[
    Lexicon {
        tag: EmotionTag::Frustrated,
        weight: -2.0,
        keywords: &[
            "frustrated",
            "angry",
            "upset",
            "annoyed",
            "terrible",
            "worst",
            "hate",
            "sick of",
            "ridiculous",
        ],
    },
    Lexicon {
        tag: EmotionTag::Urgent,
        weight: -1.0,
        keywords: &[
            "urgent",
            "asap",
            "immediately",
            "emergency",
            "critical",
            "now",
            "quickly",
        ],
    },
    Lexicon {
        tag: EmotionTag::Confused,
        weight: -0.5,
        keywords: &[
            "confused",
            "don't understand",
            "unclear",
            "not sure",
            "help",
            "lost",
        ],
    },
    Lexicon {
        tag: EmotionTag::Satisfied,
        weight: 2.0,
        keywords: &[
            "thanks",
            "thank you",
            "great",
            "perfect",
            "excellent",
            "wonderful",
            "solved",
        ],
    },
];

// =============================================================================
// SentimentAnalyzer
// =============================================================================

/// Rule-based sentiment analyzer over fixed keyword lexicons.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a raw message. Never fails; empty input is neutral.
    pub fn analyze(&self, message: &str) -> SentimentResult {
        let lower = message.to_lowercase();
        let mut score = 0.0;
        let mut emotions = BTreeSet::new();

        for lexicon in LEXICONS {
            let hits = lexicon
                .keywords
                .iter()
                .filter(|kw| lower.contains(*kw))
                .count();
            if hits > 0 {
                emotions.insert(lexicon.tag);
                score += lexicon.weight * hits as f64;
            }
        }

        SentimentResult {
            score,
            emotions,
            escalation_risk: RiskTier::from_score(score),
        }
    }
}
