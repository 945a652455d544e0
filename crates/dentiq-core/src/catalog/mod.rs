//! Static, ordered content catalogs driving each widget.
//!
//! A catalog is built once, validated, and shared read-only afterwards.
//! Items are addressed by string ids that stay stable for the lifetime of
//! the process.

mod question;
mod quest;
mod tip;

pub use question::{Question, ScoredOption};
pub use quest::{QuestOption, QuestStage};
pub use tip::{Difficulty, Tip, TipCategory};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CatalogError;

/// Presentation tag resolved to an actual glyph by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Shield,
    Heart,
    AlertTriangle,
    Calendar,
    Trophy,
    Smile,
    Meh,
    Frown,
    Star,
    Clock,
    Apple,
    Coffee,
    Moon,
    Baby,
    AlertCircle,
    CheckCircle,
    XCircle,
}

/// An entry of a walkable catalog (a question or a quest stage).
pub trait CatalogItem {
    /// Unique identifier within the catalog.
    fn id(&self) -> &str;

    /// Ids of the selectable options, in display order.
    fn option_ids(&self) -> Vec<&str>;

    /// Points awarded for choosing `option_id`, or `None` for an unknown option.
    fn points_for(&self, option_id: &str) -> Option<u32>;

    /// Best achievable points for this item.
    fn max_points(&self) -> u32;

    fn has_option(&self, option_id: &str) -> bool {
        self.points_for(option_id).is_some()
    }
}

/// Items that can be identified but carry no options (tip cards).
pub trait Identified {
    fn id(&self) -> &str;
}

/// Ordered, validated, immutable list of items.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Build a walkable catalog.
    ///
    /// # Errors
    ///
    /// Fails when the list is empty, an item id repeats, an item has no
    /// options, an option id repeats inside its item, or the best achievable
    /// total does not fit in a `u32`.
    pub fn new(items: Vec<T>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut max_total: u32 = 0;
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateItem(item.id().to_string()));
            }

            let option_ids = item.option_ids();
            if option_ids.is_empty() {
                return Err(CatalogError::NoOptions(item.id().to_string()));
            }

            let mut seen_options = HashSet::new();
            for option in option_ids {
                if !seen_options.insert(option) {
                    return Err(CatalogError::DuplicateOption {
                        item: item.id().to_string(),
                        option: option.to_string(),
                    });
                }
            }

            max_total = max_total
                .checked_add(item.max_points())
                .ok_or_else(|| CatalogError::PointsOverflow(item.id().to_string()))?;
        }

        Ok(Self { items })
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Position of the item with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Sum of the best achievable points over all items.
    pub fn max_points(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.max_points()))
    }
}

impl<T: Identified> Catalog<T> {
    /// Build a catalog of option-less cards.
    ///
    /// # Errors
    ///
    /// Fails when the list is empty or an id repeats.
    pub fn of_cards(items: Vec<T>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateItem(item.id().to_string()));
            }
        }

        Ok(Self { items })
    }

    pub fn card(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

impl<T> Catalog<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
