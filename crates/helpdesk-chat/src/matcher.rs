//! Keyword-overlap FAQ matching.
//!
//! A question's whitespace-separated tokens are its keywords. An entry's
//! score is the number of its keywords found as substrings of the
//! lower-cased query; the first entry with the strictly highest score wins,
//! provided it reaches [`MATCH_THRESHOLD`].

use std::sync::Arc;

use helpdesk_core::corpus::FaqCorpus;
use helpdesk_core::types::{FaqEntry, MatchResult};

/// Minimum keyword hits for an entry to count as a match.
pub const MATCH_THRESHOLD: usize = 2;

/// Count how many of `question`'s tokens occur in `lower_query`.
pub fn keyword_hits(question: &str, lower_query: &str) -> usize {
    question
        .split_whitespace()
        .filter(|kw| lower_query.contains(*kw))
        .count()
}

/// Score `query` against `entries` and return the best match, if any.
pub fn find_match(query: &str, entries: &[FaqEntry]) -> MatchResult {
    let lower = query.to_lowercase();
    let mut best: Option<(&FaqEntry, usize)> = None;

    for entry in entries {
        let hits = keyword_hits(&entry.question, &lower);
        let best_hits = best.map(|(_, h)| h).unwrap_or(0);
        // Strictly greater: ties keep the earlier entry.
        if hits > best_hits {
            best = Some((entry, hits));
        }
    }

    match best {
        Some((entry, hits)) if hits >= MATCH_THRESHOLD => MatchResult::Matched {
            category: entry.category.clone(),
            answer: entry.answer.clone(),
            confidence: hits,
        },
        _ => MatchResult::NoMatch,
    }
}

/// Matcher bound to a shared corpus.
#[derive(Debug, Clone)]
pub struct FaqMatcher {
    corpus: Arc<FaqCorpus>,
}

impl FaqMatcher {
    pub fn new(corpus: Arc<FaqCorpus>) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &FaqCorpus {
        &self.corpus
    }

    pub fn find(&self, query: &str) -> MatchResult {
        find_match(query, self.corpus.entries())
    }
}
