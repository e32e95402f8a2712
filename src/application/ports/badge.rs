//! Action badge port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::TabId;

/// Badge errors
#[derive(Debug, Clone, Error)]
pub enum BadgeError {
    #[error("Failed to update badge: {0}")]
    UpdateFailed(String),
}

/// Port for the per-tab action badge.
#[async_trait]
pub trait ActionBadge: Send + Sync {
    /// Set the badge text and background color on a tab's action icon.
    async fn set(&self, tab_id: TabId, text: &str, color: &str) -> Result<(), BadgeError>;

    /// Clear the badge text on a tab's action icon.
    async fn clear(&self, tab_id: TabId) -> Result<(), BadgeError>;
}

/// Blanket implementation for boxed badge types
#[async_trait]
impl ActionBadge for Box<dyn ActionBadge> {
    async fn set(&self, tab_id: TabId, text: &str, color: &str) -> Result<(), BadgeError> {
        self.as_ref().set(tab_id, text, color).await
    }

    async fn clear(&self, tab_id: TabId) -> Result<(), BadgeError> {
        self.as_ref().clear(tab_id).await
    }
}
