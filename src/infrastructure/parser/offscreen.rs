//! Message-passing parsing boundary
//!
//! The deployment shape used when the privileged context cannot run a
//! DOM parser itself: the parsing capability lives in a separate document
//! task, and parse requests travel over an asynchronous request/response
//! channel. The document is a process-wide singleton managed by the
//! offscreen lifecycle.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::application::offscreen::OffscreenLifecycle;
use crate::application::ports::{
    CreateDocumentError, HtmlParse, OffscreenHost, ParserBoundary, ParserError,
};

use super::messages::{FailureKind, ParseRequest, ParseResponse, PARSE_ACTION};

struct Envelope {
    request: ParseRequest,
    reply: oneshot::Sender<ParseResponse>,
}

type SharedParser = Arc<dyn HtmlParse>;
type ParserFactory = Arc<dyn Fn() -> Option<SharedParser> + Send + Sync>;

/// Host primitives for the parser document: enumeration checks whether a
/// live channel to the document task exists, creation spawns the task.
pub struct DocumentSpawner {
    make_parser: ParserFactory,
    channel: Mutex<Option<mpsc::Sender<Envelope>>>,
}

impl DocumentSpawner {
    fn new(make_parser: ParserFactory) -> Self {
        Self {
            make_parser,
            channel: Mutex::new(None),
        }
    }

    fn sender(&self) -> Option<mpsc::Sender<Envelope>> {
        self.channel
            .lock()
            .ok()
            .and_then(|channel| channel.clone())
    }
}

#[async_trait]
impl OffscreenHost for DocumentSpawner {
    async fn has_live_document(&self) -> bool {
        self.sender().map(|tx| !tx.is_closed()).unwrap_or(false)
    }

    async fn create_document(&self) -> Result<(), CreateDocumentError> {
        // The parser collaborator may fail to load; the document still
        // comes up and answers every request with a setup error, which is
        // a different outcome than failing to create the document.
        let parser = (self.make_parser)();
        let (tx, rx) = mpsc::channel(16);
        tokio::spawn(document_loop(parser, rx));

        let mut channel = self
            .channel
            .lock()
            .map_err(|_| CreateDocumentError::new("document channel slot poisoned"))?;
        *channel = Some(tx);
        Ok(())
    }
}

/// The parser document's message listener.
async fn document_loop(parser: Option<SharedParser>, mut rx: mpsc::Receiver<Envelope>) {
    while let Some(Envelope { request, reply }) = rx.recv().await {
        // Unrelated actions are not for this document
        if request.action != PARSE_ACTION {
            continue;
        }

        let response = match &parser {
            None => ParseResponse::setup_error(
                "parseAll is not defined. Check that the parser module loaded correctly.",
            ),
            Some(parser) => match parser.parse_all(&request.html_content) {
                Ok(data) => ParseResponse::ok(data),
                Err(failure) => ParseResponse::parse_error(failure.message, failure.stack),
            },
        };
        let _ = reply.send(response);
    }
}

/// Parsing boundary backed by the singleton parser document.
pub struct OffscreenParser {
    lifecycle: OffscreenLifecycle<DocumentSpawner>,
}

impl OffscreenParser {
    /// Create the boundary with a factory for the parseAll collaborator.
    /// The factory runs inside the document when it is created; returning
    /// `None` models a parser that failed to load.
    pub fn new(make_parser: ParserFactory) -> Self {
        Self {
            lifecycle: OffscreenLifecycle::new(DocumentSpawner::new(make_parser)),
        }
    }
}

#[async_trait]
impl ParserBoundary for OffscreenParser {
    async fn parse(&self, html: &str) -> Result<String, ParserError> {
        self.lifecycle
            .ensure()
            .await
            .map_err(|e| ParserError::Inactive(e.to_string()))?;

        let tx = self
            .lifecycle
            .host()
            .sender()
            .ok_or_else(|| ParserError::Inactive("no parser document is active".to_string()))?;

        let (reply_tx, reply_rx) = oneshot::channel();
        tx.send(Envelope {
            request: ParseRequest::new(html),
            reply: reply_tx,
        })
        .await
        .map_err(|_| ParserError::ChannelClosed("receiving end does not exist".to_string()))?;

        let response = reply_rx
            .await
            .map_err(|_| ParserError::ChannelClosed("document dropped the request".to_string()))?;

        if response.success {
            response.data.ok_or_else(|| ParserError::Parse {
                message: "response carried no data".to_string(),
                stack: None,
            })
        } else {
            let message = response.error.unwrap_or_else(|| "Unknown error".to_string());
            match response.kind {
                Some(FailureKind::Setup) => Err(ParserError::Setup(message)),
                _ => Err(ParserError::Parse {
                    message,
                    stack: response.stack,
                }),
            }
        }
    }
}
