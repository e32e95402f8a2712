//! File-scheme access check port interface

use async_trait::async_trait;
use thiserror::Error;

/// File-access check errors
#[derive(Debug, Clone, Error)]
pub enum FileAccessError {
    #[error("File access check unavailable in this context: {0}")]
    Unavailable(String),

    #[error("File access check failed: {0}")]
    CheckFailed(String),
}

/// Port for verifying the explicit file-scheme access grant.
///
/// The grant is checked, never requested. The primary method may be
/// unavailable in some execution contexts; callers then fall back to the
/// legacy callback-style method before giving up.
#[async_trait]
pub trait FileAccessCheck: Send + Sync {
    /// Primary check method.
    async fn is_allowed(&self) -> Result<bool, FileAccessError>;

    /// Legacy callback-based check method, used when the primary one is
    /// unavailable in the current execution context.
    async fn is_allowed_legacy(&self) -> Result<bool, FileAccessError>;
}

/// Blanket implementation for boxed check types
#[async_trait]
impl FileAccessCheck for Box<dyn FileAccessCheck> {
    async fn is_allowed(&self) -> Result<bool, FileAccessError> {
        self.as_ref().is_allowed().await
    }

    async fn is_allowed_legacy(&self) -> Result<bool, FileAccessError> {
        self.as_ref().is_allowed_legacy().await
    }
}
