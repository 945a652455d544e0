//! Result views: the display payload built from a classified score.
//!
//! Rendering is a pure mapping. Restarting a widget is the controller's job.

use serde::{Deserialize, Serialize};

use crate::catalog::Icon;
use crate::scoring::{ResultBucket, Scorecard};

pub const DEFAULT_CALL_TO_ACTION: &str = "Записаться на консультацию";

/// Everything a front end needs to draw a result screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultView {
    /// Card title.
    pub headline: String,
    /// "Your result: N of M" line.
    pub summary: String,
    /// Bucket label as shown on the badge.
    pub label: String,
    pub icon: Icon,
    pub score: Scorecard,
    /// Fill of the progress bar, `total / max_possible`.
    pub progress: f64,
    /// Heading of the list below, if any.
    pub list_title: Option<String>,
    pub recommendations: Vec<String>,
    pub call_to_action: String,
    /// Caption of the restart button.
    pub restart_label: String,
}

impl ResultView {
    /// Result screen of the health calculator.
    pub fn calculator(
        card: Scorecard,
        bucket: &ResultBucket,
        show_recommendations: bool,
        call_to_action: &str,
    ) -> Self {
        let (list_title, recommendations) = if show_recommendations {
            (
                Some("Рекомендации для вас:".to_string()),
                bucket.recommendations.clone(),
            )
        } else {
            (None, Vec::new())
        };

        Self {
            headline: "Результат оценки".to_string(),
            summary: format!(
                "Ваш результат: {} из {} баллов",
                card.total, card.max_possible
            ),
            label: format!("{} здоровье зубов", bucket.label),
            icon: bucket.icon,
            score: card,
            progress: card.fraction(),
            list_title,
            recommendations,
            call_to_action: call_to_action.to_string(),
            restart_label: "Пройти тест заново".to_string(),
        }
    }

    /// Completion screen of the quest. `takeaways` lists what the quest covered.
    pub fn quest(
        card: Scorecard,
        bucket: &ResultBucket,
        takeaways: Vec<String>,
        call_to_action: &str,
    ) -> Self {
        Self {
            headline: "Квест завершен!".to_string(),
            summary: format!(
                "Ваш результат: {} из {} правильных ответов",
                card.total, card.max_possible
            ),
            label: bucket.label.clone(),
            icon: bucket.icon,
            score: card,
            progress: card.fraction(),
            list_title: Some("Заработанные знания:".to_string()),
            recommendations: takeaways,
            call_to_action: call_to_action.to_string(),
            restart_label: "Пройти квест заново".to_string(),
        }
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        const BAR_WIDTH: usize = 20;

        let filled = ((self.progress * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let mut out = format!(
            "{}\n{}\n[{}{}] {}\n",
            self.headline,
            self.summary,
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            self.label,
        );

        if let Some(title) = &self.list_title {
            out.push('\n');
            out.push_str(title);
            out.push('\n');
            for line in &self.recommendations {
                out.push_str("  • ");
                out.push_str(line);
                out.push('\n');
            }
        }

        out.push('\n');
        out.push_str(&self.call_to_action);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket() -> ResultBucket {
        ResultBucket::new(40, "Отличное", Icon::Shield, &["a", "b", "c"])
    }

    #[test]
    fn calculator_view_formats_summary_and_badge() {
        let card = Scorecard { total: 45, max_possible: 50 };
        let view = ResultView::calculator(card, &bucket(), true, DEFAULT_CALL_TO_ACTION);

        assert_eq!(view.summary, "Ваш результат: 45 из 50 баллов");
        assert_eq!(view.label, "Отличное здоровье зубов");
        assert_eq!(view.recommendations, vec!["a", "b", "c"]);
        assert!((view.progress - 0.9).abs() < 1e-9);
    }

    #[test]
    fn recommendations_can_be_hidden() {
        let card = Scorecard { total: 45, max_possible: 50 };
        let view = ResultView::calculator(card, &bucket(), false, DEFAULT_CALL_TO_ACTION);
        assert!(view.list_title.is_none());
        assert!(view.recommendations.is_empty());
        assert!(!view.to_text().contains("Рекомендации"));
    }

    #[test]
    fn text_rendering_draws_progress_bar() {
        let card = Scorecard { total: 25, max_possible: 50 };
        let view = ResultView::calculator(card, &bucket(), true, "Позвоните нам");
        let text = view.to_text();
        assert!(text.contains("[##########----------]"));
        assert!(text.contains("  • b\n"));
        assert!(text.ends_with("Позвоните нам\n"));
    }
}
