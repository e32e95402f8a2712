//! LmsClipper - one-click assignment clipper
//!
//! This crate clips structured assignment text out of e-learning pages:
//! it snapshots a page, routes the HTML through a parsing boundary, and
//! copies the parsed result to the clipboard, reporting success with a
//! transient badge and failures with a single notification.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, outcome taxonomy, notices, and errors
//! - **Application**: The clip use case, the offscreen-document
//!   lifecycle, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP/file extraction,
//!   parsing boundaries, clipboard, badge, notifications, config)
//! - **CLI**: Command-line interface and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
