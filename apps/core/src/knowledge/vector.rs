//! Sparse term-frequency vectors and cosine similarity.

use std::collections::HashMap;

use super::tokens::{term_frequencies, tokenize};

/// Term-frequency vector with a precomputed magnitude.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    terms: HashMap<String, f32>,
    magnitude: f32,
}

impl TermVector {
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let terms = term_frequencies(tokens);
        let magnitude = terms.values().map(|v| v * v).sum::<f32>().sqrt();
        Self { terms, magnitude }
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn get(&self, term: &str) -> f32 {
        self.terms.get(term).copied().unwrap_or(0.0)
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// Cosine similarity over the shared non-zero dimensions.
    ///
    /// Returns `0.0` when either vector is empty or nothing overlaps.
    pub fn cosine(&self, other: &TermVector) -> f32 {
        if self.magnitude == 0.0 || other.magnitude == 0.0 {
            return 0.0;
        }

        let (small, large) = if self.terms.len() <= other.terms.len() {
            (&self.terms, &other.terms)
        } else {
            (&other.terms, &self.terms)
        };

        let dot: f32 = small
            .iter()
            .filter_map(|(term, weight)| large.get(term).map(|w| weight * w))
            .sum();

        if dot == 0.0 {
            return 0.0;
        }
        dot / (self.magnitude * other.magnitude)
    }
}
