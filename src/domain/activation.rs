//! Activation value objects
//!
//! An activation is one user gesture on the action icon, scoped to a tab.
//! It lives only for the duration of the clip workflow.

use std::fmt;

/// Identifier of the tab the user activated the action on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(pub u32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab#{}", self.0)
    }
}

/// One click-triggered request: the tab it targets and the URL the tab
/// reported at activation time. The URL may be absent (e.g. a tab the
/// host could not resolve), which the orchestrator treats as a terminal
/// tab-resolution error.
#[derive(Debug, Clone)]
pub struct Activation {
    pub tab_id: TabId,
    pub url: Option<String>,
}

impl Activation {
    pub fn new(tab_id: TabId, url: impl Into<String>) -> Self {
        Self {
            tab_id,
            url: Some(url.into()),
        }
    }

    /// Activation on a tab whose URL could not be determined.
    pub fn without_url(tab_id: TabId) -> Self {
        Self { tab_id, url: None }
    }
}
