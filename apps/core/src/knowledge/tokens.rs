//! Tokenization for knowledge retrieval.
//!
//! Lower-cases, replaces everything that is not a letter, digit or whitespace
//! with a space, then drops tokens of two characters or fewer and stop-words
//! (German and English).

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Tokens shorter than this (in characters) are dropped.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Stop-words for German. Words of two characters or fewer are dropped by
/// length and are not listed.
const STOPWORDS_DE: &[&str] = &[
    "und", "oder", "aber", "der", "die", "das", "den", "dem", "des", "ein", "eine", "einer",
    "eines", "einem", "einen", "ich", "mich", "mir", "mein", "meine", "meinen", "meiner", "dich",
    "dir", "dein", "deine", "sie", "ihr", "ihre", "ihm", "ihn", "wir", "uns", "unser", "unsere",
    "euch", "euer", "was", "wer", "wie", "wann", "warum", "welche", "welcher", "welches", "ist",
    "sind", "war", "waren", "bin", "bist", "hat", "habe", "hast", "haben", "hatte", "wird",
    "werden", "wurde", "kann", "kannst", "können", "muss", "müssen", "soll", "sollte", "will",
    "möchte", "mit", "von", "für", "auf", "aus", "bei", "nach", "über", "unter", "vor", "zum",
    "zur", "durch", "gegen", "ohne", "nicht", "kein", "keine", "auch", "noch", "schon", "nur",
    "sehr", "mal", "doch", "dann", "denn", "wenn", "weil", "dass", "als", "hier", "dort", "jetzt",
    "gibt", "man", "sich", "sein", "seine", "diese", "dieser", "dieses", "etwas", "viel", "mehr",
    "immer", "alle", "alles", "bitte",
];

/// Stop-words for English.
const STOPWORDS_EN: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "your", "with", "this", "that", "these",
    "those", "what", "how", "was", "were", "have", "has", "had", "can", "could", "from", "they",
    "them", "our", "who", "why", "when", "where", "which", "will", "would", "about", "there",
    "their", "been", "being", "does", "did", "into", "than", "then", "also", "just", "very",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS_DE.iter().chain(STOPWORDS_EN).copied().collect());

// NOTE: expect() is acceptable for a literal pattern compiled once.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]+").expect("Invalid regex: non-word pattern"));

/// Check if a lower-cased word is a stop-word.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Splits text into retrieval tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    NON_WORD
        .replace_all(&lower, " ")
        .split_whitespace()
        .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS && !is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Raw occurrence count per token.
pub fn term_frequencies<I>(tokens: I) -> HashMap<String, f32>
where
    I: IntoIterator<Item = String>,
{
    let mut freq: HashMap<String, f32> = HashMap::new();
    for token in tokens {
        *freq.entry(token).or_insert(0.0) += 1.0;
    }
    freq
}
