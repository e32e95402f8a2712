//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Notice;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for user-visible failure notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a notification for a categorized notice.
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError> {
        self.as_ref().notify(notice).await
    }
}

/// Blanket implementation for shared notifier types
#[async_trait]
impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError> {
        self.as_ref().notify(notice).await
    }
}
