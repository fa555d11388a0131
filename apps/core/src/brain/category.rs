//! Topic/severity categories emitted by keyword detection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Detected topic or severity signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Suicidal ideation
    Crisis,
    /// Self-injury
    SelfHarm,
    Depression,
    Anxiety,
    Stress,
    Burnout,
    /// Low self-esteem, feeling worthless
    SelfWorth,
    Loneliness,
    /// Partnership, family and relationship conflicts
    Relationship,
    Trauma,
    Sleep,
    Grief,
    /// The user explicitly asks for help
    HelpSeeking,
    /// Questions about therapy, therapists or the matching process
    TherapyInquiry,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 14] = [
        Category::Crisis,
        Category::SelfHarm,
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
        Category::HelpSeeking,
        Category::TherapyInquiry,
    ];

    /// Stable snake_case label used on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Crisis => "crisis",
            Category::SelfHarm => "self_harm",
            Category::Depression => "depression",
            Category::Anxiety => "anxiety",
            Category::Stress => "stress",
            Category::Burnout => "burnout",
            Category::SelfWorth => "self_worth",
            Category::Loneliness => "loneliness",
            Category::Relationship => "relationship",
            Category::Trauma => "trauma",
            Category::Sleep => "sleep",
            Category::Grief => "grief",
            Category::HelpSeeking => "help_seeking",
            Category::TherapyInquiry => "therapy_inquiry",
        }
    }

    /// True for the categories that force the crisis branch.
    pub fn is_crisis(&self) -> bool {
        matches!(self, Category::Crisis | Category::SelfHarm)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
