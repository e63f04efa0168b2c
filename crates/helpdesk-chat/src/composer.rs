//! Response composition for support replies.
//!
//! Builds the reply text and suggested actions from a match result and a
//! sentiment result without requiring an LLM. The base reply comes from the
//! FAQ match (or a fallback apology); a single sentiment overlay is then
//! chosen from [`OVERLAY_RULES`], evaluated top to bottom.

use helpdesk_core::types::{ActionTag, EmotionTag, MatchResult, RiskTier, SentimentResult};

/// Prior transcript length above which a non-low risk match offers escalation.
pub const ESCALATION_HISTORY_THRESHOLD: usize = 2;

const NO_MATCH_MESSAGE: &str =
    "I apologize, but I couldn't find a specific answer to your question in our FAQ database.";

const DIFFICULTY_OFFER: &str = "\n\nI notice you've been experiencing some difficulties. Would you like me to connect you with a human agent for personalized assistance?";

const FRUSTRATION_APOLOGY: &str =
    "I understand you're frustrated, and I sincerely apologize for the inconvenience. ";

const PRIORITY_NOTICE: &str = "\n\nPriority Support: I'm escalating your case to our senior support team. Expected response time: 5-10 minutes.";

const URGENT_ACKNOWLEDGMENT: &str = "I see this is urgent. ";

const SIMPLIFY_OFFER: &str = "\n\nWould you like me to break this down into simpler steps?";

// =============================================================================
// ComposedResponse
// =============================================================================

/// Final reply plus the metadata reported alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedResponse {
    pub message: String,
    pub faq_matched: bool,
    /// Matched category, or "general".
    pub category: String,
    /// Match confidence, or 0.
    pub confidence: usize,
    pub suggested_actions: Vec<ActionTag>,
}

impl ComposedResponse {
    pub fn has_action(&self, action: ActionTag) -> bool {
        self.suggested_actions.contains(&action)
    }
}

// =============================================================================
// Sentiment overlays
// =============================================================================

/// A sentiment-driven decoration applied after the base reply is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Frustrated and high risk: apologize, announce priority escalation.
    PriorityEscalation,
    /// Urgent: acknowledge the urgency up front.
    UrgentAcknowledgment,
    /// Confused: offer a step-by-step breakdown.
    SimplifyOffer,
}

/// Overlay precedence. The first rule whose condition holds is the only one applied.
pub const OVERLAY_RULES: [Overlay; 3] = [
    Overlay::PriorityEscalation,
    Overlay::UrgentAcknowledgment,
    Overlay::SimplifyOffer,
];

impl Overlay {
    /// Pick the overlay for a sentiment, if any.
    pub fn select(sentiment: &SentimentResult) -> Option<Overlay> {
        OVERLAY_RULES
            .iter()
            .copied()
            .find(|rule| rule.applies(sentiment))
    }

    pub fn applies(&self, sentiment: &SentimentResult) -> bool {
        match self {
            Overlay::PriorityEscalation => {
                sentiment.has(EmotionTag::Frustrated)
                    && sentiment.escalation_risk == RiskTier::High
            }
            Overlay::UrgentAcknowledgment => sentiment.has(EmotionTag::Urgent),
            Overlay::SimplifyOffer => sentiment.has(EmotionTag::Confused),
        }
    }

    fn apply(&self, message: &mut String, actions: &mut Vec<ActionTag>) {
        match self {
            Overlay::PriorityEscalation => {
                message.insert_str(0, FRUSTRATION_APOLOGY);
                message.push_str(PRIORITY_NOTICE);
                actions.insert(0, ActionTag::PriorityEscalation);
            }
            Overlay::UrgentAcknowledgment => {
                message.insert_str(0, URGENT_ACKNOWLEDGMENT);
            }
            Overlay::SimplifyOffer => {
                message.push_str(SIMPLIFY_OFFER);
                actions.push(ActionTag::DetailedGuide);
            }
        }
    }
}

// =============================================================================
// ResponseComposer
// =============================================================================

/// Composes support replies. Stateless; the caller supplies history length.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseComposer;

impl ResponseComposer {
    pub fn new() -> Self {
        Self
    }

    /// Compose a reply.
    ///
    /// `prior_turns` is the transcript length before the current exchange is
    /// appended.
    pub fn compose(
        &self,
        prior_turns: usize,
        faq_match: &MatchResult,
        sentiment: &SentimentResult,
    ) -> ComposedResponse {
        let mut actions = Vec::new();

        let (mut message, faq_matched, category, confidence) = match faq_match {
            MatchResult::Matched {
                category,
                answer,
                confidence,
            } => {
                let mut message = answer.clone();
                if prior_turns > ESCALATION_HISTORY_THRESHOLD
                    && sentiment.escalation_risk != RiskTier::Low
                {
                    message.push_str(DIFFICULTY_OFFER);
                    actions.push(ActionTag::EscalateToHuman);
                }
                (message, true, category.clone(), *confidence)
            }
            MatchResult::NoMatch => {
                actions.push(ActionTag::EscalateToHuman);
                actions.push(ActionTag::BrowseFaqs);
                (NO_MATCH_MESSAGE.to_string(), false, "general".to_string(), 0)
            }
        };

        if let Some(overlay) = Overlay::select(sentiment) {
            overlay.apply(&mut message, &mut actions);
        }

        ComposedResponse {
            message,
            faq_matched,
            category,
            confidence,
            suggested_actions: actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sentiment(score: f64, tags: &[EmotionTag]) -> SentimentResult {
        SentimentResult {
            score,
            emotions: tags.iter().copied().collect::<BTreeSet<_>>(),
            escalation_risk: RiskTier::from_score(score),
        }
    }

    fn matched() -> MatchResult {
        MatchResult::Matched {
            category: "Account".into(),
            answer: "Do the thing.".into(),
            confidence: 3,
        }
    }

    fn compose(prior: usize, m: &MatchResult, s: &SentimentResult) -> ComposedResponse {
        ResponseComposer::new().compose(prior, m, s)
    }

    #[test]
    fn test_matched_neutral_is_answer_verbatim() {
        let r = compose(0, &matched(), &SentimentResult::default());
        assert_eq!(r.message, "Do the thing.");
        assert!(r.faq_matched);
        assert_eq!(r.category, "Account");
        assert_eq!(r.confidence, 3);
        assert!(r.suggested_actions.is_empty());
    }

    #[test]
    fn test_no_match_fallback() {
        let r = compose(0, &MatchResult::NoMatch, &SentimentResult::default());
        assert_eq!(r.message, NO_MATCH_MESSAGE);
        assert!(!r.faq_matched);
        assert_eq!(r.category, "general");
        assert_eq!(r.confidence, 0);
        assert_eq!(
            r.suggested_actions,
            vec![ActionTag::EscalateToHuman, ActionTag::BrowseFaqs]
        );
    }

    #[test]
    fn test_history_offer_needs_more_than_two_prior_turns() {
        // medium risk from a single urgent hit
        let s = sentiment(-1.0, &[]);
        let r = compose(2, &matched(), &s);
        assert!(!r.message.contains("experiencing some difficulties"));
        assert!(r.suggested_actions.is_empty());

        let r = compose(3, &matched(), &s);
        assert!(r.message.ends_with(DIFFICULTY_OFFER));
        assert_eq!(r.suggested_actions, vec![ActionTag::EscalateToHuman]);
    }

    #[test]
    fn test_history_offer_skipped_for_low_risk() {
        let r = compose(10, &matched(), &sentiment(-0.5, &[]));
        assert_eq!(r.message, "Do the thing.");
        assert!(r.suggested_actions.is_empty());
    }

    #[test]
    fn test_priority_overlay_on_no_match() {
        let s = sentiment(-5.0, &[EmotionTag::Frustrated, EmotionTag::Urgent]);
        let r = compose(0, &MatchResult::NoMatch, &s);
        assert!(r.message.starts_with(FRUSTRATION_APOLOGY));
        assert!(r.message.ends_with(PRIORITY_NOTICE));
        assert!(!r.message.contains(URGENT_ACKNOWLEDGMENT));
        assert_eq!(
            r.suggested_actions,
            vec![
                ActionTag::PriorityEscalation,
                ActionTag::EscalateToHuman,
                ActionTag::BrowseFaqs
            ]
        );
    }

    #[test]
    fn test_priority_overlay_keeps_duplicate_escalation_actions() {
        let s = sentiment(-4.0, &[EmotionTag::Frustrated]);
        let r = compose(5, &matched(), &s);
        assert_eq!(
            r.suggested_actions,
            vec![ActionTag::PriorityEscalation, ActionTag::EscalateToHuman]
        );
        assert_eq!(
            r.message,
            format!(
                "{}Do the thing.{}{}",
                FRUSTRATION_APOLOGY, DIFFICULTY_OFFER, PRIORITY_NOTICE
            )
        );
    }

    #[test]
    fn test_frustrated_medium_falls_through_to_urgent() {
        // frustrated alone at -2 is medium, so the urgent rule applies next
        let s = sentiment(-2.0, &[EmotionTag::Frustrated, EmotionTag::Urgent]);
        assert_eq!(Overlay::select(&s), Some(Overlay::UrgentAcknowledgment));
        let r = compose(0, &matched(), &s);
        assert_eq!(r.message, format!("{}Do the thing.", URGENT_ACKNOWLEDGMENT));
        assert!(r.suggested_actions.is_empty());
    }

    #[test]
    fn test_urgent_beats_confused() {
        let s = sentiment(-1.5, &[EmotionTag::Urgent, EmotionTag::Confused]);
        let r = compose(0, &matched(), &s);
        assert!(r.message.starts_with(URGENT_ACKNOWLEDGMENT));
        assert!(!r.message.contains(SIMPLIFY_OFFER));
        assert!(!r.has_action(ActionTag::DetailedGuide));
    }

    #[test]
    fn test_confused_appends_offer_and_guide() {
        let s = sentiment(-0.5, &[EmotionTag::Confused]);
        let r = compose(0, &MatchResult::NoMatch, &s);
        assert!(r.message.ends_with(SIMPLIFY_OFFER));
        assert_eq!(
            r.suggested_actions,
            vec![
                ActionTag::EscalateToHuman,
                ActionTag::BrowseFaqs,
                ActionTag::DetailedGuide
            ]
        );
    }

    #[test]
    fn test_satisfied_has_no_overlay() {
        let s = sentiment(2.0, &[EmotionTag::Satisfied]);
        assert_eq!(Overlay::select(&s), None);
    }

    #[test]
    fn test_rule_table_order() {
        assert_eq!(
            OVERLAY_RULES,
            [
                Overlay::PriorityEscalation,
                Overlay::UrgentAcknowledgment,
                Overlay::SimplifyOffer
            ]
        );
    }
}
