//! Wire format of the parser-document message channel

use serde::{Deserialize, Serialize};

/// Action tag carried by every parse request.
pub const PARSE_ACTION: &str = "parseHTMLViaOffscreen";

/// Request sent from the orchestrator to the parser document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    pub action: String,
    pub html_content: String,
}

impl ParseRequest {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            action: PARSE_ACTION.to_string(),
            html_content: html.into(),
        }
    }
}

/// Failure discriminator: a setup error (parseAll unavailable) is
/// distinguishable from a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    #[serde(rename = "setupError")]
    Setup,
    #[serde(rename = "parseError")]
    Parse,
}

/// Response sent back by the parser document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ParseResponse {
    pub fn ok(data: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data.into()),
            kind: None,
            error: None,
            stack: None,
        }
    }

    pub fn setup_error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            kind: Some(FailureKind::Setup),
            error: Some(error.into()),
            stack: None,
        }
    }

    pub fn parse_error(error: impl Into<String>, stack: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            kind: Some(FailureKind::Parse),
            error: Some(error.into()),
            stack,
        }
    }
}
