use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::brain::category::Category;
use crate::brain::sentiment::Sentiment;

/// Greeting seeded into every new conversation.
pub const GREETING: &str = "Hallo! Schön, dass du da bist. Ich bin hier, um dir zuzuhören und \
     gemeinsam mit dir passende Unterstützung zu finden. Wie geht es dir gerade? Erzähl mir gern, \
     was dich beschäftigt.";

/// The sender of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// Coarse progress marker of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStage {
    #[default]
    Greeting,
    Listening,
    AssessmentOffer,
    /// Only set by the hosting layer through [`ConversationState::close`].
    Closing,
}

/// Call-to-action hint for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    TakeAssessment,
    ContactSupport,
    CrisisResources,
}

/// Analysis attached to an assistant message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<SuggestedAction>,
    #[serde(default)]
    pub detected_topics: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// Represents a single message within a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            metadata: None,
        }
    }

    pub fn assistant(content: impl Into<String>, metadata: Option<MessageMetadata>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            metadata,
        }
    }
}

/// Per-session conversation state.
///
/// Owned by exactly one session. `detected_concerns` only grows and
/// `has_offered_assessment` never goes back to `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    pub session_id: Uuid,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub current_topic: Option<Category>,
    pub conversation_stage: ConversationStage,
    pub has_offered_assessment: bool,
    #[serde(default)]
    pub detected_concerns: BTreeSet<Category>,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationState {
    /// Fresh session seeded with the greeting message.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            messages: vec![Message::assistant(GREETING, None)],
            current_topic: None,
            conversation_stage: ConversationStage::Greeting,
            has_offered_assessment: false,
            detected_concerns: BTreeSet::new(),
        }
    }

    /// Number of user messages so far.
    ///
    /// The log is the greeting followed by one user/assistant pair per turn,
    /// so the count follows from its length.
    pub fn user_turn_count(&self) -> usize {
        self.messages.len().saturating_sub(1) / 2
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Moves the session to the closing stage. Called by the hosting layer
    /// when it ends the conversation.
    pub fn close(&mut self) {
        self.conversation_stage = ConversationStage::Closing;
    }

    /// One-line description for logging. Contains no message text.
    pub fn summary(&self) -> String {
        format!(
            "Session: {}, Messages: {}, Stage: {:?}, Topic: {}, Concerns: {}, Assessment offered: {}",
            self.session_id,
            self.messages.len(),
            self.conversation_stage,
            self.current_topic.map(|c| c.label()).unwrap_or("none"),
            self.detected_concerns.len(),
            if self.has_offered_assessment { "yes" } else { "no" }
        )
    }
}
