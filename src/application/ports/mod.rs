//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod badge;
pub mod config;
pub mod extractor;
pub mod file_access;
pub mod notifier;
pub mod offscreen_host;
pub mod page_clipboard;
pub mod parser;

// Re-export common types
pub use badge::{ActionBadge, BadgeError};
pub use config::ConfigStore;
pub use extractor::{ExtractError, PageExtractor};
pub use file_access::{FileAccessCheck, FileAccessError};
pub use notifier::{NotificationError, Notifier};
pub use offscreen_host::{CreateDocumentError, OffscreenHost};
pub use page_clipboard::{CopyInjection, PageClipboard};
pub use parser::{HtmlParse, ParseAllFailure, ParserBoundary, ParserError};
