//! Notification infrastructure module
//!
//! Desktop notifications via notify-rust (primary) with a terminal
//! fallback for headless runs.

mod console;
mod notify_rust;

pub use console::ConsoleNotifier;
pub use notify_rust::NotifyRustNotifier;

use crate::application::ports::Notifier;

/// Create the notifier for the current run: desktop notifications when
/// enabled, terminal output otherwise.
pub fn create_notifier(desktop: bool) -> Box<dyn Notifier> {
    if desktop {
        Box::new(NotifyRustNotifier::new())
    } else {
        Box::new(ConsoleNotifier::new())
    }
}
