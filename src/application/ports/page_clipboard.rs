//! In-page clipboard injection port interface

use async_trait::async_trait;

use crate::domain::TabId;

/// What the copy injection reported back. The writer itself never raises
/// past its own boundary, but the injection mechanism can still fail or
/// come back empty-handed; each case gets its own explanatory message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyInjection {
    /// The in-page writer confirmed the copy.
    Copied,
    /// The in-page writer ran and returned an explicit `false`.
    Refused,
    /// The injection mechanism reported a script error.
    Failed(String),
    /// The injection resolved without any result at all.
    NoResult,
}

/// Port for running the clipboard writer inside the target tab's page
/// execution context (not the extension's isolated world).
#[async_trait]
pub trait PageClipboard: Send + Sync {
    /// Inject the copy routine with `text` into the given tab.
    async fn copy_in_page(&self, tab_id: TabId, text: &str) -> CopyInjection;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl PageClipboard for Box<dyn PageClipboard> {
    async fn copy_in_page(&self, tab_id: TabId, text: &str) -> CopyInjection {
        self.as_ref().copy_in_page(tab_id, text).await
    }
}

/// Blanket implementation for shared clipboard types
#[async_trait]
impl<T: PageClipboard + ?Sized> PageClipboard for std::sync::Arc<T> {
    async fn copy_in_page(&self, tab_id: TabId, text: &str) -> CopyInjection {
        self.as_ref().copy_in_page(tab_id, text).await
    }
}
