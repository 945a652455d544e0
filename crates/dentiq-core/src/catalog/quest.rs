use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// One stage of the educational quest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestStage {
    pub id: String,
    /// Short stage title shown in the header.
    pub title: String,
    /// One-line description under the title.
    pub description: String,
    /// The question asked at this stage.
    pub question: String,
    pub options: Vec<QuestOption>,
    /// Advice revealed once the answer is submitted.
    pub tip: String,
    /// Line listed under "earned knowledge" on the completion screen.
    pub takeaway: String,
}

/// A possible answer of a quest stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestOption {
    pub id: String,
    pub text: String,
    pub correct: bool,
    /// Why this answer is right or wrong.
    pub explanation: String,
}

impl QuestOption {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        correct: bool,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            correct,
            explanation: explanation.into(),
        }
    }
}

impl QuestStage {
    pub fn option(&self, option_id: &str) -> Option<&QuestOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

// A correct answer is worth one point, so the total is the count of correct answers.
impl CatalogItem for QuestStage {
    fn id(&self) -> &str {
        &self.id
    }

    fn option_ids(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.id.as_str()).collect()
    }

    fn points_for(&self, option_id: &str) -> Option<u32> {
        self.option(option_id).map(|o| u32::from(o.correct))
    }

    fn max_points(&self) -> u32 {
        u32::from(self.options.iter().any(|o| o.correct))
    }
}
