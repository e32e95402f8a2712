//! Parsing boundary infrastructure module
//!
//! Two deployment shapes behind one `ParserBoundary` interface, chosen
//! once at startup: a message-passing parser document (the default) and
//! an inline in-process call.

mod assignments;
mod inline;
mod messages;
mod offscreen;

pub use assignments::AssignmentParser;
pub use inline::InlineParser;
pub use messages::{FailureKind, ParseRequest, ParseResponse, PARSE_ACTION};
pub use offscreen::OffscreenParser;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::application::ports::{HtmlParse, ParserBoundary};
use crate::domain::error::InvalidShapeError;

/// Parsing boundary deployment shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserShape {
    /// Separate parser document reached over a message channel.
    #[default]
    Offscreen,
    /// Direct in-process call.
    Inline,
}

impl fmt::Display for ParserShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserShape::Offscreen => write!(f, "offscreen"),
            ParserShape::Inline => write!(f, "inline"),
        }
    }
}

impl FromStr for ParserShape {
    type Err = InvalidShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "offscreen" => Ok(ParserShape::Offscreen),
            "inline" => Ok(ParserShape::Inline),
            _ => Err(InvalidShapeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Create the parsing boundary for the selected shape, wired to the
/// built-in assignment parser. Construction failure of the collaborator
/// surfaces later as a setup error, not a crash.
pub fn create_parser(shape: ParserShape) -> Box<dyn ParserBoundary> {
    match shape {
        ParserShape::Offscreen => Box::new(OffscreenParser::new(Arc::new(|| {
            AssignmentParser::new()
                .ok()
                .map(|p| Arc::new(p) as Arc<dyn HtmlParse>)
        }))),
        ParserShape::Inline => Box::new(InlineParser::new(AssignmentParser::new().ok())),
    }
}
