//! Page extraction port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Activation;

/// Extraction errors, tagged with an explicit kind at the failure site
/// so the orchestrator never classifies by message text.
#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    #[error("The host refused the injection: missing host permission")]
    MissingHostPermission,

    #[error("Cannot access contents of the file URL")]
    FileUrlBlocked,

    #[error("Injection returned no result")]
    NoResult,

    #[error("Failed to extract page HTML: {0}")]
    Failed(String),
}

/// Port for serializing the target tab's live document to a string.
///
/// The extraction itself has no side effects; failures come from the
/// host injection mechanism, not from the page read.
#[async_trait]
pub trait PageExtractor: Send + Sync {
    /// Return the full serialized HTML of the activated tab's document.
    async fn extract_html(&self, activation: &Activation) -> Result<String, ExtractError>;
}

/// Blanket implementation for boxed extractor types
#[async_trait]
impl PageExtractor for Box<dyn PageExtractor> {
    async fn extract_html(&self, activation: &Activation) -> Result<String, ExtractError> {
        self.as_ref().extract_html(activation).await
    }
}
