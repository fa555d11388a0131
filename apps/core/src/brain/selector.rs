//! Response selection.
//!
//! Picks the reply for one user turn. Branches are tried in strict order:
//!
//! 1. Crisis: any crisis category, always, whatever the session looks like.
//! 2. Accumulated concerns: the session already holds enough distinct
//!    concerns and no assessment was offered yet.
//! 3. Single category: the template of the top category.
//! 4. Fallback: nothing detected.
//!
//! Selection never mutates the session; the analyzer applies the result.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use super::category::Category;
use super::keywords::KeywordMatcher;
use super::responses::{
    ResponseTemplate, TemplateRegistry, ACKNOWLEDGMENTS, ASSESSMENT_INTROS, CRISIS_RESOURCES,
    ELABORATE_PROMPTS,
};
use super::sentiment::{classify_sentiment, Sentiment};
use crate::config::DEFAULT_CONCERN_THRESHOLD;
use crate::models::{ConversationState, MessageMetadata, SuggestedAction};

const PARAGRAPH: &str = "\n\n";

/// Opening line used when a crisis category has no registered template.
const CRISIS_FALLBACK_LINE: &str =
    "Es tut mir sehr leid, dass es dir gerade so schlecht geht. Du verdienst sofort Unterstützung.";

/// Which branch produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsePath {
    Crisis,
    AccumulatedConcerns,
    SingleCategory,
    Fallback,
}

/// Assistant reply for one turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedResponse {
    pub response: String,
    pub metadata: MessageMetadata,
    pub path: ResponsePath,
}

/// Chooses the reply text and suggested action for a turn.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    matcher: KeywordMatcher,
    templates: TemplateRegistry,
    concern_threshold: usize,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(
            KeywordMatcher::new(),
            TemplateRegistry::default(),
            DEFAULT_CONCERN_THRESHOLD,
        )
    }
}

fn pick<'a, R, S>(rng: &mut R, items: &'a [S]) -> &'a str
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    items.choose(rng).map(|s| s.as_ref()).unwrap_or_default()
}

impl ResponseSelector {
    pub fn new(matcher: KeywordMatcher, templates: TemplateRegistry, concern_threshold: usize) -> Self {
        Self {
            matcher,
            templates,
            concern_threshold: concern_threshold.max(1),
        }
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    /// Generates the reply using the thread-local RNG for variant choice.
    pub fn generate(&self, text: &str, state: &ConversationState) -> GeneratedResponse {
        self.generate_with_rng(text, state, &mut rand::thread_rng())
    }

    /// Generates the reply with a caller-supplied RNG.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        state: &ConversationState,
        rng: &mut R,
    ) -> GeneratedResponse {
        let categories = self.matcher.detect(text);
        let sentiment = classify_sentiment(&categories);

        if sentiment == Sentiment::Crisis {
            return self.crisis_response(categories, rng);
        }

        if categories.is_empty() {
            return Self::fallback_response(categories, rng);
        }
        let top = categories[0];
        let Some(template) = self.templates.get(top) else {
            debug!(category = %top, "No template registered, using fallback reply");
            return Self::fallback_response(categories, rng);
        };

        let metadata = |action| MessageMetadata {
            suggested_action: action,
            detected_topics: categories.clone(),
            sentiment: Some(sentiment),
        };

        if state.detected_concerns.len() >= self.concern_threshold && !state.has_offered_assessment {
            let mut parts = Self::base_parts(template, rng, true);
            parts.push(pick(rng, ASSESSMENT_INTROS));
            return GeneratedResponse {
                response: parts.join(PARAGRAPH),
                metadata: metadata(Some(SuggestedAction::TakeAssessment)),
                path: ResponsePath::AccumulatedConcerns,
            };
        }

        let repeat_visitor = state.user_turn_count() >= 1;
        let parts = Self::base_parts(template, rng, repeat_visitor);
        GeneratedResponse {
            response: parts.join(PARAGRAPH),
            metadata: metadata(template.suggested_action),
            path: ResponsePath::SingleCategory,
        }
    }

    fn base_parts<'a, R: Rng + ?Sized>(
        template: &'a ResponseTemplate,
        rng: &mut R,
        with_follow_up: bool,
    ) -> Vec<&'a str> {
        let mut parts = vec![pick(rng, &template.responses)];
        if with_follow_up {
            if let Some(follow_up) = template.follow_up.as_deref() {
                parts.push(follow_up);
            }
        }
        parts
    }

    fn crisis_response<R: Rng + ?Sized>(&self, categories: Vec<Category>, rng: &mut R) -> GeneratedResponse {
        let template = categories
            .iter()
            .filter(|c| c.is_crisis())
            .find_map(|c| self.templates.get(*c));

        let primary = template
            .map(|t| pick(rng, &t.responses))
            .unwrap_or(CRISIS_FALLBACK_LINE);
        // The emergency guidance is mandatory, even for a template without a follow-up.
        let follow_up = template
            .and_then(|t| t.follow_up.as_deref())
            .unwrap_or(CRISIS_RESOURCES);

        warn!(
            target: "triage::crisis",
            categories = ?categories,
            "Crisis signal detected, returning emergency resources"
        );

        GeneratedResponse {
            response: [primary, follow_up].join(PARAGRAPH),
            metadata: MessageMetadata {
                suggested_action: Some(SuggestedAction::CrisisResources),
                detected_topics: categories,
                sentiment: Some(Sentiment::Crisis),
            },
            path: ResponsePath::Crisis,
        }
    }

    fn fallback_response<R: Rng + ?Sized>(categories: Vec<Category>, rng: &mut R) -> GeneratedResponse {
        let response = format!(
            "{} {}",
            pick(rng, ACKNOWLEDGMENTS),
            pick(rng, ELABORATE_PROMPTS)
        );
        GeneratedResponse {
            response,
            metadata: MessageMetadata {
                suggested_action: None,
                detected_topics: categories,
                sentiment: Some(Sentiment::Neutral),
            },
            path: ResponsePath::Fallback,
        }
    }
}
