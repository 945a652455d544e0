//! Core error types for dentiq-core.
//!
//! Every error here is an invariant guard: a correctly wired front end only
//! ever hands the library ids taken from the catalogs it was given, so none of
//! these are expected at runtime. They are still reported as values rather
//! than panics so callers decide how loudly to fail.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dentiq-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog construction errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Walk controller errors
    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),

    /// Scoring/classification errors
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while building a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog must contain at least one item")]
    Empty,

    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("Item '{0}' has no options")]
    NoOptions(String),

    #[error("Duplicate option '{option}' in item '{item}'")]
    DuplicateOption { item: String, option: String },

    #[error("Best achievable total overflows at item '{0}'")]
    PointsOverflow(String),
}

/// Errors raised by the walk controller and the tips browser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// The id does not name any item in the catalog.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// The item exists but is not the one currently shown.
    #[error("Item '{given}' is not the current item '{current}'")]
    ItemNotCurrent { given: String, current: String },

    /// The option is not one of the current item's options.
    #[error("Invalid option {option} for item {item}")]
    UnknownOption { item: String, option: String },

    /// Advancing requires a recorded response for the current item.
    #[error("Item '{0}' must be answered before advancing")]
    MustAnswer(String),

    /// The walk already reached its end; only reset is accepted.
    #[error("Walk already completed")]
    Completed,

    /// The answer was submitted and can no longer be changed.
    #[error("Answer for item '{0}' is already submitted")]
    AnswerLocked(String),
}

/// Errors raised while building or querying a bucket table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Bucket table must contain at least one bucket")]
    NoBuckets,

    #[error("Duplicate bucket lower bound: {0}")]
    DuplicateBound(u32),

    #[error("Bucket table must start at 0 (lowest bound is {0})")]
    MissingZeroBound(u32),

    #[error("No bucket matches value {0}")]
    NoMatch(u32),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dotted key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home/config directory could not be determined or created
    #[error("Configuration directory unavailable: {0}")]
    NoConfigDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
