//! Triage core: a rule-based conversational triage brain.
//!
//! Detects topic and severity signals in free text, escalates to crisis
//! resources deterministically, keeps per-session conversation state and
//! surfaces platform facts from a small knowledge corpus.
//!
//! Hosting layers own session storage and rendering; this crate only
//! computes.

pub mod brain;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use brain::analyzer::{
    create_initial_state, detect_keywords, detect_keywords_labels, generate_response,
    process_user_message, search_knowledge_base,
};
pub use brain::{
    classify_sentiment, classify_sentiment_labels, Category, GeneratedResponse, Sentiment,
    TriageAnalyzer, TurnOutcome,
};
pub use config::TriageConfig;
pub use error::AppError;
pub use knowledge::{build_context_snippet, KnowledgeBase, KnowledgeEntry, KnowledgeHit};
pub use models::{
    ConversationStage, ConversationState, Message, MessageMetadata, Role, SuggestedAction,
};
