//! The three clinic widgets, each owning its own state.

mod calculator;
mod quest;
mod tips;

pub use calculator::HealthCalculator;
pub use quest::{DentalQuest, StageFeedback, StageMarker};
pub use tips::{CategoryTab, TipCard, TipsBrowser};
