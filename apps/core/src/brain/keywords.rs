//! Prioritized keyword detection.
//!
//! Each pattern maps a set of keyword substrings to a [`Category`] with a
//! priority. Matching runs on normalized text (lower-case, no diacritics),
//! so `"überfordert"` and `"Uberfordert"` hit the same keyword.
//!
//! Output order is deterministic: descending priority, ties broken by the
//! order in which patterns were registered.

use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use super::category::Category;
use super::normalize::normalize;

/// Match mode of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// At least one keyword must occur.
    Any,
    /// Every keyword must occur.
    All,
}

/// A registered keyword set.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    /// Normalized keyword substrings
    pub keywords: Vec<String>,
    pub category: Category,
    /// Higher wins
    pub priority: i32,
    pub mode: MatchMode,
}

impl KeywordPattern {
    /// Pattern that fires when any keyword is present.
    pub fn any(category: Category, priority: i32, keywords: &[&str]) -> Self {
        Self::build(category, priority, MatchMode::Any, keywords)
    }

    /// Pattern that fires only when every keyword is present.
    pub fn all(category: Category, priority: i32, keywords: &[&str]) -> Self {
        Self::build(category, priority, MatchMode::All, keywords)
    }

    fn build(category: Category, priority: i32, mode: MatchMode, keywords: &[&str]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| normalize(k))
                .filter(|k| !k.is_empty())
                .collect(),
            category,
            priority,
            mode,
        }
    }

    /// Tests the pattern against already-normalized text.
    ///
    /// A pattern without keywords never matches.
    pub fn matches(&self, normalized: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        match self.mode {
            MatchMode::Any => self.keywords.iter().any(|k| normalized.contains(k.as_str())),
            MatchMode::All => self.keywords.iter().all(|k| normalized.contains(k.as_str())),
        }
    }
}

/// (category, priority, mode, keywords)
type PatternRow = (Category, i32, MatchMode, &'static [&'static str]);

/// Built-in pattern table, in registration order.
const DEFAULT_PATTERNS: &[PatternRow] = &[
    (
        Category::Crisis,
        100,
        MatchMode::Any,
        &[
            "suizid",
            "selbstmord",
            "sterben",
            "umbringen",
            "umzubringen",
            "bring mich um",
            "bringe mich um",
            "mich töten",
            "mich zu töten",
            "selbst töten",
            "lebensmüde",
            "nicht mehr leben",
            "nicht mehr da sein",
            "nicht mehr aufwachen",
            "nicht mehr aufzuwachen",
            "leben beenden",
            "das leben nehmen",
            "tot sein",
            "keinen ausweg",
            "alles beenden",
            "suicid",
            "kill myself",
            "end my life",
            "end it all",
            "want to die",
        ],
    ),
    (
        Category::SelfHarm,
        95,
        MatchMode::Any,
        &[
            "ritzen",
            "ritze mich",
            "selbstverletz",
            "selbst verletz",
            "verletze mich",
            "mir weh tun",
            "mir wehtun",
            "schneide mich",
            "self harm",
            "self-harm",
            "hurt myself",
            "harm myself",
            "cutting myself",
        ],
    ),
    (
        Category::Trauma,
        60,
        MatchMode::Any,
        &[
            "trauma",
            "traumat",
            "missbrauch",
            "misshandl",
            "gewalt",
            "flashback",
            "ptbs",
        ],
    ),
    (
        Category::Depression,
        50,
        MatchMode::Any,
        &[
            "depression",
            "depressiv",
            "deprimiert",
            "traurig",
            "hoffnungslos",
            "niedergeschlagen",
            "antriebslos",
            "innerlich leer",
            "keine freude",
            "depressed",
        ],
    ),
    (
        Category::Burnout,
        45,
        MatchMode::Any,
        &[
            "burnout",
            "burn-out",
            "ausgebrannt",
            "erschöpft",
            "erschöpfung",
            "keine energie",
            "keine kraft mehr",
        ],
    ),
    (
        Category::Anxiety,
        40,
        MatchMode::Any,
        &[
            "angst",
            "ängstlich",
            "panik",
            "nervös",
            "ständig sorgen",
            "herzrasen",
            "anxiety",
            "panic",
        ],
    ),
    (
        Category::Stress,
        35,
        MatchMode::Any,
        &[
            "gestresst",
            "stress",
            "überfordert",
            "überforderung",
            "unter druck",
            "angespannt",
            "hektik",
        ],
    ),
    (
        Category::SelfWorth,
        30,
        MatchMode::Any,
        &[
            "wertlos",
            "nichts wert",
            "selbstwert",
            "selbstzweifel",
            "versager",
            "hasse mich",
            "nicht gut genug",
        ],
    ),
    (
        Category::Loneliness,
        30,
        MatchMode::Any,
        &["einsam", "allein", "niemanden", "isoliert", "lonely"],
    ),
    (
        Category::Grief,
        30,
        MatchMode::Any,
        &["trauer", "trauern", "verstorben", "verlust", "gestorben"],
    ),
    (
        Category::Relationship,
        25,
        MatchMode::Any,
        &[
            "beziehung",
            "trennung",
            "scheidung",
            "streit",
            "partnerin",
            "mein partner",
            "meine eltern",
            "familie",
        ],
    ),
    (
        Category::Sleep,
        20,
        MatchMode::Any,
        &[
            "schlaflos",
            "schlafstörung",
            "einschlafen",
            "durchschlafen",
            "albtraum",
            "albträume",
            "alptraum",
            "insomnia",
        ],
    ),
    (Category::Sleep, 20, MatchMode::All, &["nicht", "schlafen"]),
    (
        Category::TherapyInquiry,
        15,
        MatchMode::Any,
        &[
            "therapie",
            "therapeut",
            "psycholog",
            "erstgespräch",
            "krankenkasse",
            "termin",
            "kostet",
            "kosten",
        ],
    ),
    (
        Category::HelpSeeking,
        10,
        MatchMode::Any,
        &["hilfe", "helfen", "unterstützung", "help me"],
    ),
    (Category::HelpSeeking, 10, MatchMode::All, &["brauche", "jemanden"]),
];

static DEFAULT_MATCHER: LazyLock<KeywordMatcher> = LazyLock::new(|| {
    KeywordMatcher::with_patterns(
        DEFAULT_PATTERNS
            .iter()
            .map(|(category, priority, mode, keywords)| match mode {
                MatchMode::Any => KeywordPattern::any(*category, *priority, keywords),
                MatchMode::All => KeywordPattern::all(*category, *priority, keywords),
            })
            .collect(),
    )
});

/// Immutable registry of keyword patterns.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    patterns: Vec<KeywordPattern>,
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordMatcher {
    /// Matcher over the built-in pattern table.
    pub fn new() -> Self {
        DEFAULT_MATCHER.clone()
    }

    /// Matcher over a custom table. Vector order is the registration order.
    pub fn with_patterns(patterns: Vec<KeywordPattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[KeywordPattern] {
        &self.patterns
    }

    /// Detects categories, highest priority first, without duplicates.
    pub fn detect(&self, text: &str) -> Vec<Category> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return vec![];
        }

        let mut hits: Vec<(Category, i32)> = self
            .patterns
            .iter()
            .filter(|p| p.matches(&normalized))
            .map(|p| (p.category, p.priority))
            .collect();

        // Stable sort keeps registration order among equal priorities.
        hits.sort_by(|a, b| b.1.cmp(&a.1));

        let mut seen = HashSet::new();
        let categories: Vec<Category> = hits
            .into_iter()
            .map(|(category, _)| category)
            .filter(|c| seen.insert(*c))
            .collect();

        debug!(
            text_len = text.len(),
            categories = ?categories,
            "Keyword detection finished"
        );

        categories
    }

    /// Same as [`detect`](Self::detect), returning wire labels.
    pub fn detect_labels(&self, text: &str) -> Vec<String> {
        self.detect(text)
            .into_iter()
            .map(|c| c.label().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_phrase_detected() {
        let matcher = KeywordMatcher::new();
        assert_eq!(matcher.detect("Ich will sterben"), vec![Category::Crisis]);
    }

    #[test]
    fn test_diacritics_ignored() {
        let matcher = KeywordMatcher::new();
        assert!(matcher.detect("Ich bin UBERFORDERT").contains(&Category::Stress));
        assert!(matcher.detect("ich bin überfordert").contains(&Category::Stress));
    }

    #[test]
    fn test_priority_order() {
        let matcher = KeywordMatcher::new();
        let detected = matcher.detect("Ich bin einsam, traurig und will nicht mehr leben");
        assert_eq!(
            detected,
            vec![Category::Crisis, Category::Depression, Category::Loneliness]
        );
    }

    #[test]
    fn test_tie_broken_by_registration_order() {
        let matcher = KeywordMatcher::with_patterns(vec![
            KeywordPattern::any(Category::Grief, 5, &["blau"]),
            KeywordPattern::any(Category::Sleep, 5, &["blau"]),
            KeywordPattern::any(Category::Stress, 9, &["rot"]),
        ]);
        assert_eq!(
            matcher.detect("rot und blau"),
            vec![Category::Stress, Category::Grief, Category::Sleep]
        );
    }

    #[test]
    fn test_require_all() {
        let matcher = KeywordMatcher::with_patterns(vec![KeywordPattern::all(
            Category::HelpSeeking,
            1,
            &["brauche", "jemanden"],
        )]);
        assert!(matcher.detect("ich brauche ruhe").is_empty());
        assert_eq!(
            matcher.detect("Ich brauche jemanden zum Reden"),
            vec![Category::HelpSeeking]
        );
    }

    #[test]
    fn test_duplicate_category_deduplicated() {
        let matcher = KeywordMatcher::new();
        // Hits both sleep patterns.
        let detected = matcher.detect("Ich kann nicht schlafen, wieder Albträume");
        assert_eq!(detected, vec![Category::Sleep]);
    }

    #[test]
    fn test_empty_and_neutral_text() {
        let matcher = KeywordMatcher::new();
        assert!(matcher.detect("").is_empty());
        assert!(matcher.detect("   ").is_empty());
        assert!(matcher.detect("Das Wetter ist schön heute").is_empty());
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        let pattern = KeywordPattern::all(Category::Stress, 1, &[]);
        assert!(!pattern.matches("anything"));
    }

    #[test]
    fn test_labels() {
        let matcher = KeywordMatcher::new();
        assert_eq!(matcher.detect_labels("Ich ritze mich"), vec!["self_harm"]);
    }
}
