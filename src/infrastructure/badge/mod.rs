//! Action badge infrastructure module

mod console;

pub use console::ConsoleBadge;
