//! Offscreen parser-document lifecycle
//!
//! Guarantees at most one parser document exists per process and that
//! concurrent callers converge on a single creation attempt instead of
//! racing to create duplicates.

use std::sync::Mutex;

use tokio::sync::watch;

use super::ports::{CreateDocumentError, OffscreenHost};

type CreationResult = Option<Result<(), CreateDocumentError>>;

enum Role {
    /// This caller claimed the slot and performs the creation.
    Creator(watch::Sender<CreationResult>),
    /// Another creation is in flight; observe its result.
    Waiter(watch::Receiver<CreationResult>),
}

/// Clears the in-flight-creation marker when the attempt resolves,
/// whatever the outcome, so a stale marker can never block later callers.
struct SlotGuard<'a> {
    slot: &'a Mutex<Option<watch::Receiver<CreationResult>>>,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// Singleton lifecycle for the sandboxed parser document.
///
/// State machine {absent, creating, ready}: `absent` when the host has no
/// live document and the marker slot is empty, `creating` while the slot
/// holds the in-flight attempt, `ready` once the host reports a live
/// document. `ready` persists for the process lifetime; nothing tears the
/// document down here.
pub struct OffscreenLifecycle<H> {
    host: H,
    /// Single-slot in-flight-creation marker. Only one creation may be in
    /// flight at a time; checks and writes happen under the lock, between
    /// suspension points.
    creating: Mutex<Option<watch::Receiver<CreationResult>>>,
}

impl<H: OffscreenHost> OffscreenLifecycle<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            creating: Mutex::new(None),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Ensure a parser document exists. Idempotent: every concurrent
    /// caller observes the same creation attempt and receives its result.
    pub async fn ensure(&self) -> Result<(), CreateDocumentError> {
        if self.host.has_live_document().await {
            return Ok(());
        }

        let role = {
            let mut slot = self
                .creating
                .lock()
                .map_err(|_| CreateDocumentError::new("creation marker poisoned"))?;
            match slot.as_ref() {
                Some(rx) => Role::Waiter(rx.clone()),
                None => {
                    let (tx, rx) = watch::channel(None);
                    *slot = Some(rx);
                    Role::Creator(tx)
                }
            }
        };

        match role {
            Role::Waiter(mut rx) => Self::await_creation(&mut rx).await,
            Role::Creator(tx) => {
                let _guard = SlotGuard {
                    slot: &self.creating,
                };

                let mut result = self.host.create_document().await;

                // A concurrent creator may have already succeeded; re-check
                // live contexts once before propagating the failure.
                if result.is_err() && self.host.has_live_document().await {
                    result = Ok(());
                }

                let _ = tx.send(Some(result.clone()));
                result
            }
        }
    }

    async fn await_creation(
        rx: &mut watch::Receiver<CreationResult>,
    ) -> Result<(), CreateDocumentError> {
        loop {
            if let Some(result) = rx.borrow_and_update().clone() {
                return result;
            }
            if rx.changed().await.is_err() {
                return Err(CreateDocumentError::new("creation attempt was abandoned"));
            }
        }
    }
}
