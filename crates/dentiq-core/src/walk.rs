//! Forward-only walk over a catalog.
//!
//! The controller tracks the current position and the responses recorded so
//! far. It only moves forward; the single way back is a full [`reset`].
//!
//! [`reset`]: WalkController::reset

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogItem};
use crate::error::WalkError;
use crate::scoring::{Responses, Scorecard};

/// Position of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WalkState {
    InProgress { index: usize },
    Completed,
}

/// Progress information for headers like "question 2 of 5".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkProgress {
    /// Current item index (equals `total_items` once complete).
    pub current_index: usize,
    pub total_items: usize,
    pub answered_items: usize,
    pub is_complete: bool,
}

/// Walk controller over a shared catalog.
#[derive(Debug, Clone)]
pub struct WalkController<T> {
    catalog: Arc<Catalog<T>>,
    session_id: String,
    state: WalkState,
    responses: Responses,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl<T: CatalogItem> WalkController<T> {
    pub fn new(catalog: Arc<Catalog<T>>) -> Self {
        Self {
            catalog,
            session_id: uuid::Uuid::new_v4().to_string(),
            state: WalkState::InProgress { index: 0 },
            responses: Responses::new(),
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == WalkState::Completed
    }

    /// Index of the current item, `None` once completed.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            WalkState::InProgress { index } => Some(index),
            WalkState::Completed => None,
        }
    }

    pub fn current_item(&self) -> Option<&T> {
        self.current_index().and_then(|i| self.catalog.item_at(i))
    }

    /// True when the current item is the final one.
    pub fn is_last(&self) -> bool {
        self.current_index() == Some(self.catalog.len() - 1)
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    pub fn response_for(&self, item_id: &str) -> Option<&str> {
        self.responses.get(item_id).map(String::as_str)
    }

    /// Response recorded for the current item, if any.
    pub fn current_response(&self) -> Option<&str> {
        self.current_item().and_then(|item| self.response_for(item.id()))
    }

    fn current_or_err(&self) -> Result<&T, WalkError> {
        self.current_item().ok_or(WalkError::Completed)
    }

    /// Record (or overwrite) the answer to the current item.
    ///
    /// # Errors
    ///
    /// Fails when the walk is complete, `item_id` is not the current item, or
    /// `option_id` is not one of its options.
    pub fn record_response(&mut self, item_id: &str, option_id: &str) -> Result<(), WalkError> {
        let current = self.current_or_err()?;

        if current.id() != item_id {
            if self.catalog.get(item_id).is_none() {
                return Err(WalkError::UnknownItem(item_id.to_string()));
            }
            return Err(WalkError::ItemNotCurrent {
                given: item_id.to_string(),
                current: current.id().to_string(),
            });
        }

        if !current.has_option(option_id) {
            return Err(WalkError::UnknownOption {
                item: item_id.to_string(),
                option: option_id.to_string(),
            });
        }

        debug!(session = %self.session_id, item = item_id, option = option_id, "response recorded");
        self.responses.insert(item_id.to_string(), option_id.to_string());
        Ok(())
    }

    /// Answer whatever item is current.
    pub fn answer_current(&mut self, option_id: &str) -> Result<(), WalkError> {
        let item_id = self.current_or_err()?.id().to_string();
        self.record_response(&item_id, option_id)
    }

    /// Move past the current item.
    ///
    /// # Errors
    ///
    /// Fails with [`WalkError::MustAnswer`] when the current item has no
    /// response, and [`WalkError::Completed`] when there is nothing left.
    pub fn advance(&mut self) -> Result<WalkState, WalkError> {
        let index = self.current_index().ok_or(WalkError::Completed)?;
        let item_id = self.current_or_err()?.id();

        if !self.responses.contains_key(item_id) {
            return Err(WalkError::MustAnswer(item_id.to_string()));
        }

        self.state = if index + 1 < self.catalog.len() {
            WalkState::InProgress { index: index + 1 }
        } else {
            self.completed_at = Some(Utc::now());
            let card = self.scorecard();
            info!(
                session = %self.session_id,
                total = card.total,
                max = card.max_possible,
                "walk completed"
            );
            WalkState::Completed
        };

        debug!(session = %self.session_id, state = ?self.state, "advanced");
        Ok(self.state)
    }

    /// Return to the first item with no responses.
    pub fn reset(&mut self) {
        debug!(session = %self.session_id, "walk reset");
        self.session_id = uuid::Uuid::new_v4().to_string();
        self.state = WalkState::InProgress { index: 0 };
        self.responses.clear();
        self.started_at = Utc::now();
        self.completed_at = None;
    }

    /// Score of the responses recorded so far.
    pub fn scorecard(&self) -> Scorecard {
        Scorecard::compute(&self.responses, &self.catalog)
    }

    pub fn progress(&self) -> WalkProgress {
        WalkProgress {
            current_index: self.current_index().unwrap_or(self.catalog.len()),
            total_items: self.catalog.len(),
            answered_items: self.responses.len(),
            is_complete: self.is_completed(),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Seconds spent in this walk so far.
    pub fn duration_seconds(&self) -> i64 {
        let end = self.completed_at.unwrap_or_else(Utc::now);
        (end - self.started_at).num_seconds()
    }
}
