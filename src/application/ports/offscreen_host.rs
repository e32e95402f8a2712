//! Offscreen document host port interface

use async_trait::async_trait;
use thiserror::Error;

/// Errors from creating the parser document. Clone so the lifecycle
/// manager can hand the same failure to every waiting caller.
#[derive(Debug, Clone, Error)]
#[error("Failed to create parser document: {reason}")]
pub struct CreateDocumentError {
    pub reason: String,
}

impl CreateDocumentError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Platform primitives for enumerating and creating the sandboxed parser
/// document. The lifecycle manager layers the singleton guarantee on top.
#[async_trait]
pub trait OffscreenHost: Send + Sync {
    /// Whether a live parser document currently exists.
    async fn has_live_document(&self) -> bool;

    /// Create the parser document. The host does not serialize concurrent
    /// calls; that is the lifecycle manager's job.
    async fn create_document(&self) -> Result<(), CreateDocumentError>;
}
