//! Tips browser: category tabs over static tip cards with read tracking.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::catalog::{Catalog, Difficulty, Icon, Tip, TipCategory};
use crate::config::Config;
use crate::content;
use crate::error::{Result, WalkError};

/// A tip card as displayed, with its read flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub icon: Icon,
    pub difficulty: Difficulty,
    /// Localized difficulty badge.
    pub difficulty_label: String,
    /// e.g. "2 мин".
    pub read_time: String,
    pub is_read: bool,
    /// Caption of the card's button.
    pub action_label: String,
}

/// Tab entry for the category selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTab {
    pub id: String,
    pub name: String,
    pub icon: Icon,
    pub selected: bool,
}

/// Tips browser instance.
#[derive(Debug, Clone)]
pub struct TipsBrowser {
    catalog: Arc<Catalog<Tip>>,
    selected: TipCategory,
    initial: TipCategory,
    read: HashSet<String>,
}

impl TipsBrowser {
    pub const TITLE: &'static str = "Полезные советы по уходу за зубами";

    pub fn new(catalog: Arc<Catalog<Tip>>) -> Self {
        Self {
            catalog,
            selected: TipCategory::default(),
            initial: TipCategory::default(),
            read: HashSet::new(),
        }
    }

    /// Browser over the built-in tips.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(content::tips()?)))
    }

    pub fn with_config(mut self, config: &Config) -> Self {
        self.initial = config.tips.default_category;
        self.selected = self.initial;
        self
    }

    pub fn selected_category(&self) -> TipCategory {
        self.selected
    }

    /// Switch tabs. Read state is kept across tabs.
    pub fn select_category(&mut self, category: TipCategory) {
        debug!(category = %category, "category selected");
        self.selected = category;
    }

    pub fn tabs(&self) -> Vec<CategoryTab> {
        TipCategory::ALL
            .into_iter()
            .map(|c| CategoryTab {
                id: c.id().to_string(),
                name: c.name().to_string(),
                icon: c.icon(),
                selected: c == self.selected,
            })
            .collect()
    }

    /// Tips of the given category, in catalog order.
    pub fn tips_in(&self, category: TipCategory) -> Vec<&Tip> {
        self.catalog
            .iter()
            .filter(|tip| tip.category == category)
            .collect()
    }

    /// Cards of the selected category.
    pub fn visible_tips(&self) -> Vec<TipCard> {
        self.tips_in(self.selected)
            .into_iter()
            .map(|tip| self.card(tip))
            .collect()
    }

    fn card(&self, tip: &Tip) -> TipCard {
        let is_read = self.is_read(&tip.id);
        TipCard {
            id: tip.id.clone(),
            title: tip.title.clone(),
            content: tip.content.clone(),
            icon: tip.icon,
            difficulty: tip.difficulty,
            difficulty_label: tip.difficulty.label().to_string(),
            read_time: format!("{} мин", tip.read_minutes),
            is_read,
            action_label: if is_read {
                "Прочитано"
            } else {
                "Отметить как прочитанное"
            }
            .to_string(),
        }
    }

    /// Mark a tip as read. Returns `true` if it was not read before.
    ///
    /// # Errors
    ///
    /// Fails with [`WalkError::UnknownItem`] for an id outside the catalog.
    pub fn mark_read(&mut self, tip_id: &str) -> Result<bool> {
        if self.catalog.card(tip_id).is_none() {
            return Err(WalkError::UnknownItem(tip_id.to_string()).into());
        }
        let newly = self.read.insert(tip_id.to_string());
        if newly {
            debug!(tip = tip_id, read = self.read.len(), "tip marked read");
        }
        Ok(newly)
    }

    pub fn is_read(&self, tip_id: &str) -> bool {
        self.read.contains(tip_id)
    }

    pub fn read_set(&self) -> &HashSet<String> {
        &self.read
    }

    pub fn read_count(&self) -> usize {
        self.read.len()
    }

    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// "Прочитано советов: N из M".
    pub fn footer(&self) -> String {
        format!(
            "Прочитано советов: {} из {}",
            self.read_count(),
            self.total_count()
        )
    }

    /// Clear read marks and return to the initial tab.
    pub fn reset(&mut self) {
        self.read.clear();
        self.selected = self.initial;
    }
}
