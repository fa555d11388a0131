//! Risk tier classification over detected categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;

/// Risk tier of a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Crisis,
    Concerning,
    Positive,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Crisis => "crisis",
            Sentiment::Concerning => "concerning",
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// Categories that mark a turn as concerning.
pub const CONCERNING: &[Category] = &[
    Category::Depression,
    Category::Anxiety,
    Category::Stress,
    Category::Burnout,
    Category::SelfWorth,
    Category::Loneliness,
    Category::Relationship,
    Category::Trauma,
    Category::Sleep,
    Category::Grief,
];

/// Categories that mark a turn as positive.
pub const POSITIVE: &[Category] = &[Category::HelpSeeking, Category::TherapyInquiry];

/// Maps categories to a risk tier. First rule wins; crisis is checked first.
pub fn classify_sentiment(categories: &[Category]) -> Sentiment {
    if categories.iter().any(Category::is_crisis) {
        Sentiment::Crisis
    } else if categories.iter().any(|c| CONCERNING.contains(c)) {
        Sentiment::Concerning
    } else if categories.iter().any(|c| POSITIVE.contains(c)) {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

/// String form of [`classify_sentiment`]. Unknown labels are ignored.
pub fn classify_sentiment_labels<S: AsRef<str>>(labels: &[S]) -> Sentiment {
    let categories: Vec<Category> = labels
        .iter()
        .filter_map(|l| l.as_ref().parse().ok())
        .collect();
    classify_sentiment(&categories)
}
