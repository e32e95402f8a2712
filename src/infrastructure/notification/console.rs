//! Terminal notification adapter

use async_trait::async_trait;
use colored::*;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::Notice;

/// Notifier that prints categorized notices to stderr.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError> {
        let marker = if notice.priority >= 2 {
            "✗".red()
        } else {
            "⚠".yellow()
        };
        eprintln!(
            "{} [{}] {}: {}",
            marker,
            notice.id.as_str().dimmed(),
            notice.title.bold(),
            notice.message
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Outcome;

    #[tokio::test]
    async fn prints_without_error() {
        let notice = Notice::for_outcome(&Outcome::NoData).unwrap();
        ConsoleNotifier::new().notify(&notice).await.unwrap();
    }
}
