//! Legacy selection surface backed by wl-copy
//!
//! The desktop rendition of the in-page fallback: the "hidden input"
//! holds the pending text, selection marks it, and the copy command
//! pipes the selection through wl-copy.

use std::io::Write;
use std::process::{Command, Stdio};

use super::writer::{InputHandle, SelectionSurface, SurfaceError};

/// Selection surface that fulfills the copy command with wl-copy.
pub struct WlCopySelection {
    next_id: u64,
    pending: Option<(InputHandle, String)>,
    selected: bool,
}

impl WlCopySelection {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: None,
            selected: false,
        }
    }
}

impl Default for WlCopySelection {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSurface for WlCopySelection {
    fn insert_hidden_input(&mut self, text: &str) -> Result<InputHandle, SurfaceError> {
        self.next_id += 1;
        let handle = InputHandle(self.next_id);
        self.pending = Some((handle, text.to_string()));
        self.selected = false;
        Ok(handle)
    }

    fn focus_and_select(&mut self, input: InputHandle) -> Result<(), SurfaceError> {
        match &self.pending {
            Some((handle, _)) if *handle == input => {
                self.selected = true;
                Ok(())
            }
            _ => Err(SurfaceError("no such input".to_string())),
        }
    }

    fn exec_copy(&mut self) -> Result<bool, SurfaceError> {
        if !self.selected {
            return Ok(false);
        }
        let Some((_, text)) = &self.pending else {
            return Ok(false);
        };

        let mut child = Command::new("wl-copy")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SurfaceError(format!("wl-copy: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| SurfaceError(e.to_string()))?;
        }

        let status = child.wait().map_err(|e| SurfaceError(e.to_string()))?;
        Ok(status.success())
    }

    fn remove_input(&mut self, input: InputHandle) {
        if matches!(&self.pending, Some((handle, _)) if *handle == input) {
            self.pending = None;
            self.selected = false;
        }
    }
}
