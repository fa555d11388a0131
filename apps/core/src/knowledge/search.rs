//! Knowledge base retrieval.
//!
//! Each entry carries two TF vectors built once at load time: one over
//! title, summary and content, one over its tags. A query is scored against
//! both and the better score wins, with the tag similarity weighted up.

use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use validator::Validate;

use super::corpus::{builtin_entries, KnowledgeEntry};
use super::vector::TermVector;
use crate::config::RetrievalConfig;
use crate::error::AppError;

/// Entry with its precomputed vectors.
#[derive(Debug, Clone)]
struct IndexedEntry {
    entry: KnowledgeEntry,
    content_vector: TermVector,
    tag_vector: TermVector,
}

impl IndexedEntry {
    fn new(entry: KnowledgeEntry) -> Self {
        let content_vector = TermVector::from_text(&format!(
            "{} {} {}",
            entry.title, entry.summary, entry.content
        ));
        let tag_vector = TermVector::from_text(&entry.tags.join(" "));
        Self {
            entry,
            content_vector,
            tag_vector,
        }
    }
}

/// A scored search result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KnowledgeHit<'a> {
    pub entry: &'a KnowledgeEntry,
    pub score: f32,
}

/// Immutable, vector-indexed knowledge corpus.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<IndexedEntry>,
    config: RetrievalConfig,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    /// Indexes the given entries.
    pub fn new(entries: Vec<KnowledgeEntry>, config: RetrievalConfig) -> Self {
        let entries: Vec<IndexedEntry> = entries.into_iter().map(IndexedEntry::new).collect();
        info!(entries = entries.len(), "Knowledge base indexed");
        Self { entries, config }
    }

    /// Knowledge base over the built-in corpus with default scoring.
    pub fn builtin() -> Self {
        Self::new(builtin_entries(), RetrievalConfig::default())
    }

    /// Loads a corpus from a JSON array of entries.
    ///
    /// Every entry is validated and ids must be unique.
    pub fn from_json(json: &str, config: RetrievalConfig) -> Result<Self, AppError> {
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for entry in &entries {
            entry
                .validate()
                .map_err(|e| AppError::Validation(format!("Entry '{}': {}", entry.id, e)))?;
            if !seen.insert(entry.id.as_str()) {
                return Err(AppError::Validation(format!(
                    "Duplicate knowledge entry id: {}",
                    entry.id
                )));
            }
        }

        Ok(Self::new(entries, config))
    }

    /// Reads and loads a JSON corpus file.
    pub fn from_json_file(path: impl AsRef<Path>, config: RetrievalConfig) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw, config)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn get(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().map(|e| &e.entry).find(|e| e.id == id)
    }

    /// Top entries for a query, best first.
    ///
    /// Only scores above the configured minimum are kept. `None` uses the
    /// configured default limit. An empty or stop-word-only query yields no hits.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<KnowledgeHit<'_>> {
        let limit = limit.unwrap_or(self.config.default_limit);
        let query_vector = TermVector::from_text(query);
        if query_vector.is_empty() || limit == 0 {
            return vec![];
        }

        let mut hits: Vec<KnowledgeHit<'_>> = self
            .entries
            .iter()
            .map(|indexed| {
                let content_score = query_vector.cosine(&indexed.content_vector);
                let tag_score = query_vector.cosine(&indexed.tag_vector) * self.config.tag_weight;
                KnowledgeHit {
                    entry: &indexed.entry,
                    score: content_score.max(tag_score),
                }
            })
            .filter(|hit| hit.score > self.config.min_score)
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit);

        debug!(
            query_terms = query_vector.len(),
            hits = hits.len(),
            top = hits.first().map(|h| h.entry.id.as_str()).unwrap_or("none"),
            "Knowledge search finished"
        );

        hits
    }
}

/// Renders hits as a context block for downstream consumers.
///
/// Returns an empty string when there are no hits.
pub fn build_context_snippet(hits: &[KnowledgeHit<'_>]) -> String {
    hits.iter()
        .map(|hit| {
            format!(
                "### {}\nQuelle: {}\n{}\n{}",
                hit.entry.title, hit.entry.url, hit.entry.summary, hit.entry.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, tags: &[&str], content: &str) -> KnowledgeEntry {
        KnowledgeEntry {
            id: id.to_string(),
            title: id.to_string(),
            url: format!("/{}", id),
            summary: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_pricing_ranked_first() {
        let kb = KnowledgeBase::builtin();
        let hits = kb.search("Was kostet eine Therapiesitzung?", None);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].entry.id, "pricing");
        // Tag similarity is weighted and dominates.
        assert!(hits[0].score > 1.0);
    }

    #[test]
    fn test_tag_weight_applied() {
        let kb = KnowledgeBase::new(
            vec![entry("a", &["schlaf"], "ganz anderer inhalt hier")],
            RetrievalConfig::default(),
        );
        let hits = kb.search("schlaf", None);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].score - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let config = RetrievalConfig {
            min_score: 1.0,
            tag_weight: 1.0,
            default_limit: 3,
        };
        let kb = KnowledgeBase::new(vec![entry("a", &["schlaf"], "schlaf")], config);
        assert!(kb.search("schlaf", None).is_empty());
    }

    #[test]
    fn test_empty_queries() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.search("", None).is_empty());
        assert!(kb.search("und oder aber", None).is_empty());
        assert!(kb.search("Krankenkasse", Some(0)).is_empty());
    }

    #[test]
    fn test_limit_respected() {
        let kb = KnowledgeBase::builtin();
        let hits = kb.search("Therapeut:innen Matching Erstgespräch Online Video Kosten", Some(2));
        assert!(hits.len() <= 2);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"[
            {"id":"a","title":"A","url":"/a","summary":"","tags":[],"content":"x"},
            {"id":"a","title":"B","url":"/b","summary":"","tags":[],"content":"y"}
        ]"#;
        let err = KnowledgeBase::from_json(json, RetrievalConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("Duplicate")));
    }

    #[test]
    fn test_from_json_rejects_empty_title() {
        let json = r#"[{"id":"a","title":"","url":"/a","summary":"","tags":[],"content":"x"}]"#;
        assert!(matches!(
            KnowledgeBase::from_json(json, RetrievalConfig::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_context_snippet() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(build_context_snippet(&[]), "");

        let hits = kb.search("Krankenkasse Kostenübernahme", Some(1));
        let snippet = build_context_snippet(&hits);
        let entry = kb.get("insurance").unwrap();
        assert!(snippet.contains(&entry.title));
        assert!(snippet.contains(&entry.url));
        assert!(snippet.contains(&entry.summary));
        assert!(snippet.contains(&entry.content));
    }
}
