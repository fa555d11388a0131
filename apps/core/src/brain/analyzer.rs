//! Triage Analyzer - Main orchestrator for the brain module.
//!
//! Runs one user turn end to end:
//! 1. Keyword detection and risk classification
//! 2. Response selection
//! 3. State update (one user + one assistant message per turn)
//! 4. Optional knowledge retrieval for non-crisis turns
//!
//! Derived fields are merged from the latest turn only, never by rescanning
//! the message history.

use rand::Rng;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{info, instrument};

use super::category::Category;
use super::keywords::KeywordMatcher;
use super::responses::TemplateRegistry;
use super::selector::{GeneratedResponse, ResponsePath, ResponseSelector};
use crate::config::TriageConfig;
use crate::knowledge::{build_context_snippet, KnowledgeBase, KnowledgeHit};
use crate::models::{ConversationStage, ConversationState, Message, SuggestedAction};

/// Process-wide analyzer over the built-in tables and corpus.
static DEFAULT_ANALYZER: LazyLock<TriageAnalyzer> = LazyLock::new(|| {
    info!("Initializing default triage analyzer...");
    TriageAnalyzer::new()
});

/// Result of [`TriageAnalyzer::process_turn`].
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome<'a> {
    pub state: ConversationState,
    /// Which selection branch answered the turn
    pub path: ResponsePath,
    /// Knowledge hits for the user text; always empty on crisis turns
    pub knowledge: Vec<KnowledgeHit<'a>>,
    /// `build_context_snippet(knowledge)`
    pub context: String,
}

/// Main analyzer that owns the immutable registries and the knowledge base.
#[derive(Debug, Clone)]
pub struct TriageAnalyzer {
    selector: ResponseSelector,
    knowledge: KnowledgeBase,
}

impl Default for TriageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Stage after a turn with the given suggested action.
pub fn next_stage(previous: ConversationStage, action: Option<SuggestedAction>) -> ConversationStage {
    if action == Some(SuggestedAction::TakeAssessment) {
        ConversationStage::AssessmentOffer
    } else if previous == ConversationStage::Greeting {
        ConversationStage::Listening
    } else {
        previous
    }
}

impl TriageAnalyzer {
    /// Analyzer over the built-in tables with default settings.
    pub fn new() -> Self {
        Self::from_config(&TriageConfig::default())
    }

    /// Analyzer over the built-in tables and corpus, tuned by `config`.
    pub fn from_config(config: &TriageConfig) -> Self {
        Self {
            selector: ResponseSelector::new(
                KeywordMatcher::new(),
                TemplateRegistry::default(),
                config.conversation.concern_threshold,
            ),
            knowledge: KnowledgeBase::new(
                crate::knowledge::corpus::builtin_entries(),
                config.retrieval.clone(),
            ),
        }
    }

    /// Analyzer over custom parts, e.g. a platform-supplied corpus.
    pub fn with_parts(selector: ResponseSelector, knowledge: KnowledgeBase) -> Self {
        Self { selector, knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn detect_keywords(&self, text: &str) -> Vec<Category> {
        self.selector.matcher().detect(text)
    }

    pub fn generate_response(&self, text: &str, state: &ConversationState) -> GeneratedResponse {
        self.selector.generate(text, state)
    }

    pub fn generate_response_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        state: &ConversationState,
        rng: &mut R,
    ) -> GeneratedResponse {
        self.selector.generate_with_rng(text, state, rng)
    }

    pub fn search_knowledge_base(&self, query: &str, limit: Option<usize>) -> Vec<KnowledgeHit<'_>> {
        self.knowledge.search(query, limit)
    }

    /// Applies one user turn and returns the updated state.
    pub fn process_user_message(&self, text: &str, state: ConversationState) -> ConversationState {
        self.process_user_message_with_rng(text, state, &mut rand::thread_rng())
    }

    pub fn process_user_message_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        state: ConversationState,
        rng: &mut R,
    ) -> ConversationState {
        self.run_turn(text, state, rng, false).state
    }

    /// Applies one user turn and attaches knowledge context.
    ///
    /// Crisis turns carry no knowledge so the emergency guidance stands alone.
    pub fn process_turn(&self, text: &str, state: ConversationState) -> TurnOutcome<'_> {
        self.process_turn_with_rng(text, state, &mut rand::thread_rng())
    }

    pub fn process_turn_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        state: ConversationState,
        rng: &mut R,
    ) -> TurnOutcome<'_> {
        self.run_turn(text, state, rng, true)
    }

    /// Shared by both turn APIs. Knowledge is only searched when requested.
    #[instrument(
        name = "triage_turn",
        skip_all,
        fields(session_id = %state.session_id, turn = state.user_turn_count() + 1)
    )]
    fn run_turn<R: Rng + ?Sized>(
        &self,
        text: &str,
        state: ConversationState,
        rng: &mut R,
        with_knowledge: bool,
    ) -> TurnOutcome<'_> {
        let generated = self.selector.generate_with_rng(text, &state, rng);
        let path = generated.path;
        let state = apply_turn(state, text, generated);

        let knowledge = if with_knowledge && path != ResponsePath::Crisis {
            self.knowledge.search(text, None)
        } else {
            vec![]
        };
        let context = build_context_snippet(&knowledge);

        TurnOutcome {
            state,
            path,
            knowledge,
            context,
        }
    }
}

/// Appends the user/assistant pair and merges the turn's metadata.
fn apply_turn(mut state: ConversationState, text: &str, generated: GeneratedResponse) -> ConversationState {
    let GeneratedResponse {
        response,
        metadata,
        path,
    } = generated;
    let action = metadata.suggested_action;

    state.messages.push(Message::user(text));

    state
        .detected_concerns
        .extend(metadata.detected_topics.iter().copied());
    if let Some(&topic) = metadata.detected_topics.first() {
        state.current_topic = Some(topic);
    }
    state.has_offered_assessment |= action == Some(SuggestedAction::TakeAssessment);
    state.conversation_stage = next_stage(state.conversation_stage, action);

    info!(
        path = ?path,
        sentiment = ?metadata.sentiment,
        action = ?action,
        topics = ?metadata.detected_topics,
        stage = ?state.conversation_stage,
        "Turn processed"
    );

    state.messages.push(Message::assistant(response, Some(metadata)));
    state
}

// --- Process-wide entry points over the default analyzer ---

/// Categories detected in `text`, highest priority first.
pub fn detect_keywords(text: &str) -> Vec<Category> {
    DEFAULT_ANALYZER.detect_keywords(text)
}

/// Wire-label form of [`detect_keywords`].
pub fn detect_keywords_labels(text: &str) -> Vec<String> {
    DEFAULT_ANALYZER.selector.matcher().detect_labels(text)
}

pub fn generate_response(text: &str, state: &ConversationState) -> GeneratedResponse {
    DEFAULT_ANALYZER.generate_response(text, state)
}

/// New session seeded with the greeting.
pub fn create_initial_state() -> ConversationState {
    ConversationState::new()
}

pub fn process_user_message(text: &str, state: ConversationState) -> ConversationState {
    DEFAULT_ANALYZER.process_user_message(text, state)
}

/// Knowledge search over the built-in corpus. `None` uses the default limit of 3.
pub fn search_knowledge_base(query: &str, limit: Option<usize>) -> Vec<KnowledgeHit<'static>> {
    DEFAULT_ANALYZER.knowledge.search(query, limit)
}
