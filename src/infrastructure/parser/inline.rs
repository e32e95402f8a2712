//! Inline parsing boundary
//!
//! The deployment shape for platforms whose privileged context can run
//! parseAll directly: no separate document, the call happens in-process
//! and failures are caught right here.

use async_trait::async_trait;

use crate::application::ports::{HtmlParse, ParserBoundary, ParserError};

/// Parsing boundary that calls the collaborator in-process. A parser
/// that failed to load (`None`) reports a setup error at parse time,
/// keeping the orchestrator's single call site shape-agnostic.
pub struct InlineParser<P> {
    parser: Option<P>,
}

impl<P: HtmlParse> InlineParser<P> {
    pub fn new(parser: Option<P>) -> Self {
        Self { parser }
    }
}

#[async_trait]
impl<P: HtmlParse> ParserBoundary for InlineParser<P> {
    async fn parse(&self, html: &str) -> Result<String, ParserError> {
        match &self.parser {
            None => Err(ParserError::Setup(
                "parseAll is not defined. Check that the parser module loaded correctly."
                    .to_string(),
            )),
            Some(parser) => parser
                .parse_all(html)
                .map_err(|failure| ParserError::Parse {
                    message: failure.message,
                    stack: failure.stack,
                }),
        }
    }
}
