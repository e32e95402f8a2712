//! Parsing boundary port interface

use async_trait::async_trait;
use thiserror::Error;

/// Structural failure raised by `parseAll`. Recoverable page-content
/// issues are signalled through the sentinel return value instead
/// (see `domain::parsing::PARSE_FAILURE_SENTINEL`).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ParseAllFailure {
    pub message: String,
    pub stack: Option<String>,
}

/// The external HTML-to-text collaborator. Must be pure with respect to
/// its input and idempotent.
pub trait HtmlParse: Send + Sync {
    /// Parse the serialized page and return the structured assignment
    /// text, or the sentinel string on recoverable parse failure.
    fn parse_all(&self, html: &str) -> Result<String, ParseAllFailure>;
}

/// Parsing boundary errors, kind-tagged at the failure site.
#[derive(Debug, Clone, Error)]
pub enum ParserError {
    /// parseAll is not loaded/available; distinct from a parse failure.
    #[error("Parser setup error: {0}")]
    Setup(String),

    /// parseAll raised a structural failure.
    #[error("Parse failed: {message}")]
    Parse {
        message: String,
        stack: Option<String>,
    },

    /// No parser document is active to take the request.
    #[error("No parser document is active")]
    Inactive(String),

    /// The request/response channel to the parser document broke.
    #[error("Parser channel closed: {0}")]
    ChannelClosed(String),
}

/// Uniform parsing interface the orchestrator is written against, so the
/// two deployment shapes (message-passing document vs. inline call) share
/// a single call site.
#[async_trait]
pub trait ParserBoundary: Send + Sync {
    /// Transform a page snapshot into parsed structured text.
    async fn parse(&self, html: &str) -> Result<String, ParserError>;
}

/// Blanket implementation for boxed parser types
#[async_trait]
impl ParserBoundary for Box<dyn ParserBoundary> {
    async fn parse(&self, html: &str) -> Result<String, ParserError> {
        self.as_ref().parse(html).await
    }
}
