//! Terminal-backed action badge

use async_trait::async_trait;
use colored::*;

use crate::application::ports::{ActionBadge, BadgeError};
use crate::domain::TabId;

/// Badge surface that renders set/clear events on stderr.
pub struct ConsoleBadge;

impl ConsoleBadge {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleBadge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionBadge for ConsoleBadge {
    async fn set(&self, tab_id: TabId, text: &str, _color: &str) -> Result<(), BadgeError> {
        eprintln!("{} {} [{}]", "●".green(), tab_id, text.green().bold());
        Ok(())
    }

    async fn clear(&self, tab_id: TabId) -> Result<(), BadgeError> {
        eprintln!("{} {} badge cleared", "○".dimmed(), tab_id);
        Ok(())
    }
}
