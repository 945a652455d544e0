use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Icon, Identified};

/// Tip categories shown as tabs. This is a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    #[default]
    Daily,
    Nutrition,
    Problems,
    Children,
}

impl TipCategory {
    pub const ALL: [TipCategory; 4] = [
        TipCategory::Daily,
        TipCategory::Nutrition,
        TipCategory::Problems,
        TipCategory::Children,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TipCategory::Daily => "daily",
            TipCategory::Nutrition => "nutrition",
            TipCategory::Problems => "problems",
            TipCategory::Children => "children",
        }
    }

    /// Tab title.
    pub fn name(self) -> &'static str {
        match self {
            TipCategory::Daily => "Ежедневный уход",
            TipCategory::Nutrition => "Питание",
            TipCategory::Problems => "Проблемы",
            TipCategory::Children => "Детские зубы",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            TipCategory::Daily => Icon::Clock,
            TipCategory::Nutrition => Icon::Apple,
            TipCategory::Problems => Icon::AlertCircle,
            TipCategory::Children => Icon::Baby,
        }
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TipCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TipCategory::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| {
                format!(
                    "unknown category '{s}' (expected one of: daily, nutrition, problems, children)"
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Легко",
            Difficulty::Medium => "Средне",
            Difficulty::Hard => "Сложно",
        }
    }
}

/// A tip card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: TipCategory,
    pub icon: Icon,
    pub difficulty: Difficulty,
    /// Estimated reading time in minutes.
    pub read_minutes: u32,
}

impl Identified for Tip {
    fn id(&self) -> &str {
        &self.id
    }
}
