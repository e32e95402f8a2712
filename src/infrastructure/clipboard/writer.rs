//! Page-context clipboard writer
//!
//! Runs detached from the orchestrator's error handling, so it never
//! raises past its own boundary: every failure collapses into a boolean.
//! Primary path is the asynchronous clipboard-write primitive; the
//! fallback is the legacy technique of inserting a hidden focusable
//! input, selecting its content, and invoking the synchronous copy
//! command. The temporary input is removed on every exit path.

use async_trait::async_trait;
use thiserror::Error;

/// Error from the asynchronous clipboard primitive.
#[derive(Debug, Clone, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardApiError(pub String);

/// The page runtime's asynchronous clipboard-write primitive. May be
/// absent entirely; `is_available` models the presence check.
#[async_trait]
pub trait ClipboardApi: Send + Sync {
    fn is_available(&self) -> bool;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardApiError>;
}

/// Handle to the temporary hidden input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHandle(pub u64);

/// Error from a document-side selection primitive.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct SurfaceError(pub String);

/// The document-side primitives the legacy fallback needs.
pub trait SelectionSurface: Send {
    /// Insert an off-screen, non-visible, focusable text input holding
    /// `text`.
    fn insert_hidden_input(&mut self, text: &str) -> Result<InputHandle, SurfaceError>;

    /// Give the input focus and a full-content selection.
    fn focus_and_select(&mut self, input: InputHandle) -> Result<(), SurfaceError>;

    /// Invoke the legacy synchronous copy command; `Ok(true)` only if the
    /// command reports success.
    fn exec_copy(&mut self) -> Result<bool, SurfaceError>;

    /// Remove the input from the document. Must be safe to call whatever
    /// state the copy attempt ended in.
    fn remove_input(&mut self, input: InputHandle);
}

/// Copy `text` to the clipboard: async primitive first, legacy selection
/// technique on absence or failure. Returns `true` only on a confirmed
/// copy.
pub async fn copy_text_to_clipboard<A, S>(api: &A, surface: &mut S, text: &str) -> bool
where
    A: ClipboardApi,
    S: SelectionSurface,
{
    if api.is_available() && api.write_text(text).await.is_ok() {
        return true;
    }
    fallback_copy(surface, text)
}

/// Legacy selection-based copy. The temporary input is removed on every
/// exit path, whatever the copy command reported.
pub fn fallback_copy<S: SelectionSurface>(surface: &mut S, text: &str) -> bool {
    let input = match surface.insert_hidden_input(text) {
        Ok(input) => input,
        Err(_) => return false,
    };

    let copied = surface
        .focus_and_select(input)
        .and_then(|_| surface.exec_copy());

    surface.remove_input(input);
    matches!(copied, Ok(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubApi {
        available: bool,
        works: bool,
    }

    #[async_trait]
    impl ClipboardApi for StubApi {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn write_text(&self, _text: &str) -> Result<(), ClipboardApiError> {
            if self.works {
                Ok(())
            } else {
                Err(ClipboardApiError("NotAllowedError".to_string()))
            }
        }
    }

    /// Records inserted inputs so tests can assert guaranteed cleanup.
    #[derive(Default)]
    struct FakeSurface {
        next_id: u64,
        attached: Vec<InputHandle>,
        removed: Vec<InputHandle>,
        select_fails: bool,
        copy_result: Option<Result<bool, ()>>,
    }

    impl FakeSurface {
        fn copying(success: bool) -> Self {
            Self {
                copy_result: Some(Ok(success)),
                ..Default::default()
            }
        }

        fn erroring() -> Self {
            Self {
                copy_result: Some(Err(())),
                ..Default::default()
            }
        }

        fn dangling_inputs(&self) -> usize {
            self.attached
                .iter()
                .filter(|h| !self.removed.contains(h))
                .count()
        }
    }

    impl SelectionSurface for FakeSurface {
        fn insert_hidden_input(&mut self, _text: &str) -> Result<InputHandle, SurfaceError> {
            self.next_id += 1;
            let handle = InputHandle(self.next_id);
            self.attached.push(handle);
            Ok(handle)
        }

        fn focus_and_select(&mut self, _input: InputHandle) -> Result<(), SurfaceError> {
            if self.select_fails {
                Err(SurfaceError("focus refused".to_string()))
            } else {
                Ok(())
            }
        }

        fn exec_copy(&mut self) -> Result<bool, SurfaceError> {
            match self.copy_result {
                Some(Ok(success)) => Ok(success),
                _ => Err(SurfaceError("execCommand raised".to_string())),
            }
        }

        fn remove_input(&mut self, input: InputHandle) {
            self.removed.push(input);
        }
    }

    #[tokio::test]
    async fn primary_api_short_circuits() {
        let api = StubApi {
            available: true,
            works: true,
        };
        let mut surface = FakeSurface::copying(true);

        assert!(copy_text_to_clipboard(&api, &mut surface, "text").await);
        // The fallback never ran
        assert!(surface.attached.is_empty());
    }

    #[tokio::test]
    async fn failing_api_falls_back_and_succeeds() {
        let api = StubApi {
            available: true,
            works: false,
        };
        let mut surface = FakeSurface::copying(true);

        assert!(copy_text_to_clipboard(&api, &mut surface, "text").await);
        assert_eq!(surface.attached.len(), 1);
        assert_eq!(surface.dangling_inputs(), 0);
    }

    #[tokio::test]
    async fn absent_api_goes_straight_to_fallback() {
        let api = StubApi {
            available: false,
            works: false,
        };
        let mut surface = FakeSurface::copying(true);

        assert!(copy_text_to_clipboard(&api, &mut surface, "text").await);
        assert_eq!(surface.attached.len(), 1);
    }

    #[test]
    fn fallback_reports_unsuccessful_copy_command() {
        let mut surface = FakeSurface::copying(false);
        assert!(!fallback_copy(&mut surface, "text"));
        assert_eq!(surface.dangling_inputs(), 0);
    }

    #[test]
    fn fallback_cleans_up_when_copy_command_raises() {
        let mut surface = FakeSurface::erroring();
        assert!(!fallback_copy(&mut surface, "text"));
        assert_eq!(surface.dangling_inputs(), 0);
    }

    #[test]
    fn fallback_cleans_up_when_selection_fails() {
        let mut surface = FakeSurface {
            select_fails: true,
            copy_result: Some(Ok(true)),
            ..Default::default()
        };
        assert!(!fallback_copy(&mut surface, "text"));
        assert_eq!(surface.dangling_inputs(), 0);
    }

    #[test]
    fn fallback_gives_up_if_insertion_fails() {
        struct NoInsert;
        impl SelectionSurface for NoInsert {
            fn insert_hidden_input(&mut self, _: &str) -> Result<InputHandle, SurfaceError> {
                Err(SurfaceError("no document body".to_string()))
            }
            fn focus_and_select(&mut self, _: InputHandle) -> Result<(), SurfaceError> {
                unreachable!()
            }
            fn exec_copy(&mut self) -> Result<bool, SurfaceError> {
                unreachable!()
            }
            fn remove_input(&mut self, _: InputHandle) {
                unreachable!()
            }
        }

        assert!(!fallback_copy(&mut NoInsert, "text"));
    }
}
