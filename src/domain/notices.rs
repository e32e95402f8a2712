//! Notification catalog
//!
//! Maps each failure outcome to exactly one user-visible notice. The
//! localized copy itself is an external concern; this catalog carries a
//! stable id per category plus English text so reporting stays testable.

use super::outcome::{HostFault, Outcome};

/// Stable notification identifiers, one per failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeId {
    TabUrlError,
    InvalidUrlError,
    ProtocolError,
    PermissionError,
    GetHtmlError,
    ParseError,
    EmptyParseResult,
    CopyError,
    GeneralError,
}

impl NoticeId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TabUrlError => "tabUrlError",
            Self::InvalidUrlError => "invalidUrlError",
            Self::ProtocolError => "protocolError",
            Self::PermissionError => "permissionError",
            Self::GetHtmlError => "getHtmlError",
            Self::ParseError => "parseError",
            Self::EmptyParseResult => "emptyParseResult",
            Self::CopyError => "copyError",
            Self::GeneralError => "generalError",
        }
    }
}

/// One user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub title: String,
    pub message: String,
    /// 2 for hard errors, 1 for advisory permission/protocol notices.
    pub priority: u8,
}

impl Notice {
    fn new(id: NoticeId, title: &str, message: impl Into<String>, priority: u8) -> Self {
        Self {
            id,
            title: title.to_string(),
            message: message.into(),
            priority,
        }
    }

    /// Build the notice for a failure outcome. Success carries no notice;
    /// it is reported through the action badge instead.
    pub fn for_outcome(outcome: &Outcome) -> Option<Notice> {
        let notice = match outcome {
            Outcome::Success => return None,
            Outcome::TabUrlMissing => Self::new(
                NoticeId::TabUrlError,
                "Error",
                "Could not determine the tab URL.",
                2,
            ),
            Outcome::InvalidUrl { url } => Self::new(
                NoticeId::InvalidUrlError,
                "Error",
                format!("Invalid tab URL: {url}"),
                2,
            ),
            Outcome::ProtocolNotAllowed { scheme } => Self::new(
                NoticeId::ProtocolError,
                "Unavailable",
                format!(
                    "Cannot run on this page (protocol {scheme}). Supported: http, https, file."
                ),
                1,
            ),
            Outcome::FileAccessUndetermined => Self::new(
                NoticeId::PermissionError,
                "Access check failed",
                "Could not verify the file-access permission. Please make sure it is enabled.",
                1,
            ),
            Outcome::FileAccessDenied => Self::new(
                NoticeId::PermissionError,
                "Permission required",
                "Allow file URL access in the extension settings to work with local files.",
                1,
            ),
            Outcome::ExtractionFailed { detail } => Self::new(
                NoticeId::GetHtmlError,
                "Error",
                format!("Could not get the page HTML. {detail}"),
                2,
            ),
            Outcome::ParserSetup { detail } => Self::new(
                NoticeId::ParseError,
                "Parse error",
                format!("Parser is not available: {detail}"),
                2,
            ),
            Outcome::ParseFailed { message, .. } => Self::new(
                NoticeId::ParseError,
                "Parse error",
                format!("Error while processing HTML: {message}"),
                2,
            ),
            Outcome::NoData => Self::new(
                NoticeId::EmptyParseResult,
                "Parsing",
                "Nothing to copy after parsing.",
                1,
            ),
            Outcome::SentinelResult => Self::new(
                NoticeId::EmptyParseResult,
                "Parsing",
                "Failed to parse the page content. Are you on an e-learning assignment page?",
                1,
            ),
            Outcome::CopyFailed { detail } => Self::new(
                NoticeId::CopyError,
                "Clipboard error",
                format!("Could not copy the data. {detail}"),
                2,
            ),
            Outcome::HostFault(fault) => Self::for_host_fault(*fault),
            Outcome::General { message } => Self::new(
                NoticeId::GeneralError,
                "Critical error",
                format!("An error occurred: {message}"),
                2,
            ),
        };
        Some(notice)
    }

    fn for_host_fault(fault: HostFault) -> Notice {
        match fault {
            HostFault::MissingHostPermission => Self::new(
                NoticeId::PermissionError,
                "Critical error",
                "Could not access the page. Make sure the extension holds the required host permissions.",
                2,
            ),
            HostFault::FileUrlInaccessible => Self::new(
                NoticeId::PermissionError,
                "Critical error",
                "Could not access the local file. Make sure file URL access is allowed in the extension settings.",
                2,
            ),
            HostFault::ParserInactive => Self::new(
                NoticeId::GeneralError,
                "Critical error",
                "The parser document is not active or was never created. Please try again.",
                2,
            ),
            HostFault::ChannelBroken => Self::new(
                NoticeId::GeneralError,
                "Critical error",
                "Could not reach the parser document. It may have been closed. Please try again.",
                2,
            ),
        }
    }
}
