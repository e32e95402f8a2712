//! Clipboard infrastructure module
//!
//! The in-page copy injection: a two-tier writer with an asynchronous
//! primary API (arboard) and a legacy selection-based fallback (wl-copy).

mod arboard;
mod selection;
pub mod writer;

pub use arboard::ArboardApi;
pub use selection::WlCopySelection;
pub use writer::{copy_text_to_clipboard, ClipboardApi, SelectionSurface};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{CopyInjection, PageClipboard};
use crate::domain::TabId;

/// Clipboard port adapter running the two-tier writer in the activated
/// page's context.
pub struct InPageCopy<A, S> {
    api: A,
    surface: Mutex<S>,
}

impl<A: ClipboardApi, S: SelectionSurface> InPageCopy<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self {
            api,
            surface: Mutex::new(surface),
        }
    }
}

#[async_trait]
impl<A, S> PageClipboard for InPageCopy<A, S>
where
    A: ClipboardApi,
    S: SelectionSurface,
{
    async fn copy_in_page(&self, _tab_id: TabId, text: &str) -> CopyInjection {
        let mut surface = self.surface.lock().await;
        if copy_text_to_clipboard(&self.api, &mut *surface, text).await {
            CopyInjection::Copied
        } else {
            // The writer converts all of its own failures into `false`
            CopyInjection::Refused
        }
    }
}

/// Create the default page clipboard adapter for the current platform.
pub fn create_page_clipboard() -> Box<dyn PageClipboard> {
    Box::new(InPageCopy::new(ArboardApi::new(), WlCopySelection::new()))
}
