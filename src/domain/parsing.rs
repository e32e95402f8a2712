//! Parsed-result validation
//!
//! The external `parseAll` collaborator signals a recoverable parse
//! failure by returning a sentinel string instead of raising. The
//! orchestrator must never hand that sentinel, or an empty result, to
//! the clipboard writer.

/// Literal value `parseAll` returns when the page content could not be
/// parsed. Known limitation: a legitimate parse result consisting of
/// exactly this text would be misclassified as a failure.
pub const PARSE_FAILURE_SENTINEL: &str = "Ошибка при парсинге!";

/// Why a parsed result was rejected before the clipboard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedIssue {
    /// Result is empty after trimming; nothing to copy.
    Empty,
    /// Result equals the parse-failure sentinel.
    Sentinel,
}

/// Validate a parsed result before it may reach the clipboard writer.
///
/// Emptiness is checked before the sentinel so that whitespace-only
/// output reports as "no data" rather than a sentinel failure.
pub fn validate_parsed(parsed: &str) -> Result<(), ParsedIssue> {
    if parsed.trim().is_empty() {
        return Err(ParsedIssue::Empty);
    }
    if parsed == PARSE_FAILURE_SENTINEL {
        return Err(ParsedIssue::Sentinel);
    }
    Ok(())
}
