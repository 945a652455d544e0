//! # Dentiq Core Library
//!
//! Business logic behind the interactive widgets of a dental clinic page:
//! a scored health calculator, a multi-stage quest and a tips browser.
//! Presentation is left to the caller; the `dentiq` CLI is one such front end.
//!
//! ## Architecture
//!
//! - **Catalogs**: validated, immutable item lists built once at startup
//! - **Walk**: forward-only controller over a catalog with reset
//! - **Scoring**: point sums and first-match bucket classification
//! - **Render**: result payloads (labels, icons, recommendations, progress)
//! - **Widgets**: calculator, quest and tips browser built from the above
//!
//! ## Key Components
//!
//! - [`WalkController`]: position and responses of one walk
//! - [`BucketTable`]: score ranges mapped to result text
//! - [`HealthCalculator`], [`DentalQuest`], [`TipsBrowser`]: widget state
//! - [`Config`]: TOML configuration

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod scoring;
pub mod walk;
pub mod widgets;

pub use catalog::{
    Catalog, CatalogItem, Difficulty, Icon, QuestOption, QuestStage, Question, ScoredOption, Tip,
    TipCategory,
};
pub use config::Config;
pub use error::{CatalogError, ConfigError, CoreError, ScoringError, WalkError};
pub use render::ResultView;
pub use scoring::{BucketMetric, BucketTable, ResultBucket, Responses, Scorecard};
pub use walk::{WalkController, WalkProgress, WalkState};
pub use widgets::{DentalQuest, HealthCalculator, StageFeedback, TipsBrowser};
