//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with HTTP, the filesystem, the system clipboard, etc.

pub mod badge;
pub mod clipboard;
pub mod config;
pub mod extractor;
pub mod file_access;
pub mod notification;
pub mod parser;

// Re-export adapters
pub use badge::ConsoleBadge;
pub use clipboard::{create_page_clipboard, InPageCopy};
pub use config::XdgConfigStore;
pub use extractor::{create_extractor, FilePageExtractor, HttpPageExtractor};
pub use file_access::ConfigFileAccess;
pub use notification::{create_notifier, ConsoleNotifier, NotifyRustNotifier};
pub use parser::{create_parser, AssignmentParser, InlineParser, OffscreenParser, ParserShape};
