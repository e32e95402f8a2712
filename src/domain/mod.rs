//! Domain layer - Core business logic
//!
//! Contains value objects, the outcome taxonomy, and domain errors.
//! This layer has no dependencies on external systems.

pub mod activation;
pub mod config;
pub mod error;
pub mod notices;
pub mod outcome;
pub mod parsing;

// Re-export common types
pub use activation::{Activation, TabId};
pub use config::AppConfig;
pub use error::*;
pub use notices::{Notice, NoticeId};
pub use outcome::{Outcome, BADGE_CLEAR_DELAY, BADGE_COLOR, BADGE_TEXT};
pub use parsing::{validate_parsed, ParsedIssue, PARSE_FAILURE_SENTINEL};
