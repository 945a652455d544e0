//! Dental health calculator: five point-scored questions, one result screen.

use std::sync::Arc;

use crate::catalog::{Catalog, Question};
use crate::config::Config;
use crate::content;
use crate::error::Result;
use crate::render::{ResultView, DEFAULT_CALL_TO_ACTION};
use crate::scoring::BucketTable;
use crate::walk::{WalkController, WalkProgress, WalkState};

/// Calculator widget instance.
#[derive(Debug, Clone)]
pub struct HealthCalculator {
    walk: WalkController<Question>,
    buckets: Arc<BucketTable>,
    show_recommendations: bool,
    call_to_action: String,
    result: Option<ResultView>,
}

impl HealthCalculator {
    pub const TITLE: &'static str = "Оценка здоровья ваших зубов";

    pub fn new(catalog: Arc<Catalog<Question>>, buckets: Arc<BucketTable>) -> Self {
        Self {
            walk: WalkController::new(catalog),
            buckets,
            show_recommendations: true,
            call_to_action: DEFAULT_CALL_TO_ACTION.to_string(),
            result: None,
        }
    }

    /// Calculator over the built-in questions.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            Arc::new(content::calculator_questions()?),
            Arc::new(content::calculator_buckets()?),
        ))
    }

    /// Apply presentation preferences from configuration.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.show_recommendations = config.calculator.show_recommendations;
        self.call_to_action = config.clinic.call_to_action.clone();
        self
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.walk.current_item()
    }

    /// Option picked for the current question, if any.
    pub fn selected(&self) -> Option<&str> {
        self.walk.current_response()
    }

    /// "Вопрос N из M".
    pub fn header(&self) -> String {
        let progress = self.walk.progress();
        format!(
            "Вопрос {} из {}",
            (progress.current_index + 1).min(progress.total_items),
            progress.total_items
        )
    }

    /// Caption of the forward button.
    pub fn next_label(&self) -> &'static str {
        if self.walk.is_last() {
            "Получить результат"
        } else {
            "Следующий вопрос"
        }
    }

    /// Choose an answer for the current question. May be called again to change it.
    pub fn answer(&mut self, option_id: &str) -> Result<()> {
        self.walk.answer_current(option_id)?;
        Ok(())
    }

    /// Confirm the current answer. Returns the result view after the last question.
    pub fn next(&mut self) -> Result<Option<&ResultView>> {
        if self.walk.advance()? == WalkState::Completed {
            let card = self.walk.scorecard();
            let bucket = self.buckets.classify_scorecard(&card)?;
            self.result = Some(ResultView::calculator(
                card,
                bucket,
                self.show_recommendations,
                &self.call_to_action,
            ));
        }
        Ok(self.result.as_ref())
    }

    /// Result view once the walk is complete.
    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    pub fn progress(&self) -> WalkProgress {
        self.walk.progress()
    }

    pub fn walk(&self) -> &WalkController<Question> {
        &self.walk
    }

    /// Start over from the first question.
    pub fn reset(&mut self) {
        self.walk.reset();
        self.result = None;
    }
}
