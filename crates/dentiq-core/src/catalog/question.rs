use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// A point-scored question of the health calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier for the question.
    pub id: String,
    /// Question text.
    pub prompt: String,
    /// Available answers, in display order.
    pub options: Vec<ScoredOption>,
}

/// An answer of a calculator question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredOption {
    /// Option identifier, unique within its question.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Points added to the total when chosen.
    pub points: u32,
}

impl ScoredOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, points: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            points,
        }
    }
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<ScoredOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&ScoredOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

impl CatalogItem for Question {
    fn id(&self) -> &str {
        &self.id
    }

    fn option_ids(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.id.as_str()).collect()
    }

    fn points_for(&self, option_id: &str) -> Option<u32> {
        self.option(option_id).map(|o| o.points)
    }

    fn max_points(&self) -> u32 {
        self.options.iter().map(|o| o.points).max().unwrap_or(0)
    }
}
