//! Test Module
//!
//! Cross-module test suite for the triage core.
//!
//! ## Test Categories
//! - `brain_tests`: keyword detection, crisis recall, risk classification, response selection
//! - `knowledge_tests`: retrieval ordering, thresholds, corpus loading
//! - `conversation_tests`: state machine properties and multi-turn scenarios
//! - `integration_tests`: configuration, custom corpora, full sessions

pub mod brain_tests;
