//! Educational quest: each stage is answered, submitted for feedback, then
//! left behind. The result counts correct answers.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::catalog::{Catalog, QuestStage};
use crate::config::Config;
use crate::content;
use crate::error::{Result, WalkError};
use crate::render::{ResultView, DEFAULT_CALL_TO_ACTION};
use crate::scoring::BucketTable;
use crate::walk::{WalkController, WalkProgress, WalkState};

/// Feedback revealed after an answer is submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageFeedback {
    pub correct: bool,
    /// "Правильно!" or "Неправильно!".
    pub verdict: String,
    /// Explanation of the chosen option (empty when explanations are off).
    pub explanation: String,
    /// Stage tip (empty when explanations are off).
    pub tip: String,
}

/// State of one dot in the stage indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageMarker {
    Done,
    Current,
    Pending,
}

/// Quest widget instance.
#[derive(Debug, Clone)]
pub struct DentalQuest {
    walk: WalkController<QuestStage>,
    buckets: Arc<BucketTable>,
    /// Current stage's answer has been submitted.
    submitted: bool,
    show_explanations: bool,
    call_to_action: String,
    result: Option<ResultView>,
}

impl DentalQuest {
    pub fn new(catalog: Arc<Catalog<QuestStage>>, buckets: Arc<BucketTable>) -> Self {
        Self {
            walk: WalkController::new(catalog),
            buckets,
            submitted: false,
            show_explanations: true,
            call_to_action: DEFAULT_CALL_TO_ACTION.to_string(),
            result: None,
        }
    }

    /// Quest over the built-in stages.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            Arc::new(content::quest_stages()?),
            Arc::new(content::quest_buckets()?),
        ))
    }

    pub fn with_config(mut self, config: &Config) -> Self {
        self.show_explanations = config.quest.show_explanations;
        self.call_to_action = config.clinic.call_to_action.clone();
        self
    }

    pub fn current_stage(&self) -> Option<&QuestStage> {
        self.walk.current_item()
    }

    pub fn selected(&self) -> Option<&str> {
        self.walk.current_response()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// "Этап N из M".
    pub fn header(&self) -> String {
        let progress = self.walk.progress();
        format!(
            "Этап {} из {}",
            (progress.current_index + 1).min(progress.total_items),
            progress.total_items
        )
    }

    /// One marker per stage: done, current or pending.
    pub fn markers(&self) -> Vec<StageMarker> {
        let current = self.walk.progress().current_index;
        (0..self.walk.catalog().len())
            .map(|i| match i.cmp(&current) {
                std::cmp::Ordering::Less => StageMarker::Done,
                std::cmp::Ordering::Equal => StageMarker::Current,
                std::cmp::Ordering::Greater => StageMarker::Pending,
            })
            .collect()
    }

    /// Caption of the forward button after submission.
    pub fn next_label(&self) -> &'static str {
        if self.walk.is_last() {
            "Завершить квест"
        } else {
            "Следующий этап"
        }
    }

    /// Pick an answer. Allowed until the answer is submitted.
    pub fn select(&mut self, option_id: &str) -> Result<()> {
        if self.submitted {
            let stage = self.walk.current_item().ok_or(WalkError::Completed)?;
            return Err(WalkError::AnswerLocked(stage.id.clone()).into());
        }
        self.walk.answer_current(option_id)?;
        Ok(())
    }

    /// Lock the selected answer and reveal whether it was right.
    ///
    /// Submitting twice returns the same feedback again.
    pub fn submit(&mut self) -> Result<StageFeedback> {
        let stage = self.walk.current_item().ok_or(WalkError::Completed)?;
        let option_id = self
            .walk
            .current_response()
            .ok_or_else(|| WalkError::MustAnswer(stage.id.clone()))?;
        let option = stage
            .option(option_id)
            .ok_or_else(|| WalkError::UnknownOption {
                item: stage.id.clone(),
                option: option_id.to_string(),
            })?;

        let feedback = StageFeedback {
            correct: option.correct,
            verdict: if option.correct {
                "Правильно!"
            } else {
                "Неправильно!"
            }
            .to_string(),
            explanation: if self.show_explanations {
                option.explanation.clone()
            } else {
                String::new()
            },
            tip: if self.show_explanations {
                stage.tip.clone()
            } else {
                String::new()
            },
        };

        debug!(stage = %stage.id, correct = feedback.correct, "answer submitted");
        self.submitted = true;
        Ok(feedback)
    }

    /// Move to the next stage. Returns the result view after the last one.
    pub fn next(&mut self) -> Result<Option<&ResultView>> {
        if !self.submitted {
            let stage = self.walk.current_item().ok_or(WalkError::Completed)?;
            return Err(WalkError::MustAnswer(stage.id.clone()).into());
        }

        let state = self.walk.advance()?;
        self.submitted = false;

        if state == WalkState::Completed {
            let card = self.walk.scorecard();
            let bucket = self.buckets.classify_scorecard(&card)?;
            let takeaways = self
                .walk
                .catalog()
                .iter()
                .map(|stage| stage.takeaway.clone())
                .collect();
            self.result = Some(ResultView::quest(card, bucket, takeaways, &self.call_to_action));
        }
        Ok(self.result.as_ref())
    }

    /// Number of correct answers so far.
    pub fn correct_count(&self) -> u32 {
        self.walk.scorecard().total
    }

    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    pub fn progress(&self) -> WalkProgress {
        self.walk.progress()
    }

    pub fn walk(&self) -> &WalkController<QuestStage> {
        &self.walk
    }

    pub fn reset(&mut self) {
        self.walk.reset();
        self.submitted = false;
        self.result = None;
    }
}
