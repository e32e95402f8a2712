//! Workflow outcome taxonomy
//!
//! Every activation resolves to exactly one `Outcome`. Failures carry an
//! explicit kind instead of being re-derived from message text, so the
//! reporting layer never has to pattern-match on strings.

use std::time::Duration;

/// Badge text shown on the action icon after a successful clip.
pub const BADGE_TEXT: &str = "OK";

/// Badge background color after a successful clip.
pub const BADGE_COLOR: &str = "#4CAF50";

/// How long the success badge stays up before it is cleared.
pub const BADGE_CLEAR_DELAY: Duration = Duration::from_millis(3000);

/// Host-level faults the injection and messaging mechanisms can report.
/// These used to be sniffed out of error message text; each site now
/// tags its failure explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFault {
    /// The host refused the injection for lack of a host permission.
    MissingHostPermission,
    /// A file:// page could not be reached even though the scheme was allowed.
    FileUrlInaccessible,
    /// No parser document is active to receive the parse request.
    ParserInactive,
    /// The message channel to the parser document is broken.
    ChannelBroken,
}

/// Coarse category an outcome is reported under (badge or notification).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Success,
    ParseError,
    CopyError,
    PermissionError,
    ProtocolError,
    GeneralError,
}

/// Final result of one activation. Never silently dropped: the reporting
/// step maps each variant to a badge (success) or a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The tab reported no URL at all.
    TabUrlMissing,
    /// The tab URL failed to parse.
    InvalidUrl { url: String },
    /// URL scheme outside the allowed set {http, https, file}.
    ProtocolNotAllowed { scheme: String },
    /// Neither file-access check method could produce an answer.
    FileAccessUndetermined,
    /// The file-access grant is confirmed absent.
    FileAccessDenied,
    /// Extraction produced nothing usable.
    ExtractionFailed { detail: String },
    /// The parsing boundary is misconfigured (parseAll unavailable).
    ParserSetup { detail: String },
    /// parseAll raised a structural failure.
    ParseFailed {
        message: String,
        stack: Option<String>,
    },
    /// Parsed result was empty after trimming.
    NoData,
    /// Parsed result equalled the parse-failure sentinel.
    SentinelResult,
    /// Clipboard write did not confirm success.
    CopyFailed { detail: String },
    /// A tagged host-level fault surfaced through a port.
    HostFault(HostFault),
    /// Backstop for anything unclassified.
    General { message: String },
}

impl Outcome {
    pub fn category(&self) -> Category {
        match self {
            Outcome::Success => Category::Success,
            Outcome::ProtocolNotAllowed { .. } => Category::ProtocolError,
            Outcome::FileAccessUndetermined
            | Outcome::FileAccessDenied
            | Outcome::HostFault(HostFault::MissingHostPermission)
            | Outcome::HostFault(HostFault::FileUrlInaccessible) => Category::PermissionError,
            Outcome::ParserSetup { .. }
            | Outcome::ParseFailed { .. }
            | Outcome::NoData
            | Outcome::SentinelResult => Category::ParseError,
            Outcome::CopyFailed { .. } => Category::CopyError,
            Outcome::TabUrlMissing
            | Outcome::InvalidUrl { .. }
            | Outcome::ExtractionFailed { .. }
            | Outcome::HostFault(_)
            | Outcome::General { .. } => Category::GeneralError,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}
