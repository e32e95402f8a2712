//! Primary clipboard API backend using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use super::writer::{ClipboardApi, ClipboardApiError};

/// Asynchronous clipboard-write primitive backed by arboard.
pub struct ArboardApi;

impl ArboardApi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardApi for ArboardApi {
    fn is_available(&self) -> bool {
        true
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardApiError> {
        let text = text.to_owned();

        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardApiError(e.to_string()))?;

            clipboard
                .set_text(&text)
                .map_err(|e| ClipboardApiError(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardApiError(format!("Task join error: {e}")))?
    }
}
