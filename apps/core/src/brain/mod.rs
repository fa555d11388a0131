//! # Brain Module
//!
//! Rule-based triage for incoming user messages. No model, no I/O: every
//! step is a pure in-memory computation over immutable registries.
//!
//! ## Components
//! - `normalize`: lower-casing and diacritic stripping
//! - `category`: detected topic/severity categories
//! - `keywords`: prioritized keyword matching
//! - `sentiment`: risk tier classification (crisis first)
//! - `responses`: response templates and phrase pools
//! - `selector`: per-turn response selection
//! - `analyzer`: main orchestrator and state machine

pub mod analyzer;
pub mod category;
pub mod keywords;
pub mod normalize;
pub mod responses;
pub mod selector;
pub mod sentiment;

pub use analyzer::{TriageAnalyzer, TurnOutcome};
pub use category::Category;
pub use keywords::{KeywordMatcher, KeywordPattern, MatchMode};
pub use responses::{ResponseTemplate, TemplateRegistry};
pub use selector::{GeneratedResponse, ResponsePath, ResponseSelector};
pub use sentiment::{classify_sentiment, classify_sentiment_labels, Sentiment};
