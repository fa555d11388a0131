//! # Knowledge Module
//!
//! Lightweight retrieval over a curated corpus of platform facts.
//!
//! ## Components
//! - `tokens`: tokenization and stop-words
//! - `vector`: sparse TF vectors and cosine similarity
//! - `corpus`: entry type and the built-in corpus
//! - `search`: indexed knowledge base and context snippets

pub mod corpus;
pub mod search;
pub mod tokens;
pub mod vector;

pub use corpus::KnowledgeEntry;
pub use search::{build_context_snippet, KnowledgeBase, KnowledgeHit};
pub use vector::TermVector;
