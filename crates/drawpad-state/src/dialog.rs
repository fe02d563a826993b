//! Modal alert/confirm dialogs answered asynchronously.
//!
//! Opening a dialog publishes its state for the UI and hands the caller a
//! [`DialogResponse`] future. The UI answers by calling
//! [`DialogStore::close_dialog`], which resolves that future and resets the
//! state.

use crate::store::Store;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tracing::debug;

/// Kind of modal dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    /// Message with a single acknowledge button.
    #[default]
    Alert,
    /// Question with accept and cancel buttons.
    Confirm,
}

/// What the UI should render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogState {
    /// Whether a dialog is showing.
    pub is_open: bool,
    /// Alert or confirm.
    pub kind: DialogKind,
    /// Text to display.
    pub message: String,
}

/// The pending answer of an opened dialog.
///
/// Resolves to the value passed to [`DialogStore::close_dialog`], or to
/// `false` if the dialog was replaced by another one or the store dropped.
#[derive(Debug)]
#[must_use = "the dialog answer is lost if the response is dropped"]
pub struct DialogResponse {
    rx: oneshot::Receiver<bool>,
}

impl Future for DialogResponse {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|answer| answer.unwrap_or(false))
    }
}

/// Dialog state plus the responder of the dialog currently showing.
#[derive(Debug, Default)]
pub struct DialogStore {
    state: Store<DialogState>,
    pending: Mutex<Option<oneshot::Sender<bool>>>,
}

impl DialogStore {
    /// Creates a closed dialog store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observable dialog state.
    pub const fn state(&self) -> &Store<DialogState> {
        &self.state
    }

    /// Whether a dialog is showing.
    pub fn is_open(&self) -> bool {
        self.state.with(|state| state.is_open)
    }

    /// Shows an alert.
    pub fn show_alert(&self, message: impl Into<String>) -> DialogResponse {
        self.open(DialogKind::Alert, message.into())
    }

    /// Shows a confirmation question.
    pub fn show_confirm(&self, message: impl Into<String>) -> DialogResponse {
        self.open(DialogKind::Confirm, message.into())
    }

    /// Answers the open dialog with `result` and closes it. Does nothing to
    /// the answer if no dialog is pending.
    pub fn close_dialog(&self, result: bool) {
        {
            let mut pending = self.pending.lock();
            if let Some(responder) = pending.take() {
                // The caller may have stopped waiting.
                let _ = responder.send(result);
            }
            self.state.set(DialogState::default());
        }
        debug!(result, "dialog closed");
    }

    fn open(&self, kind: DialogKind, message: String) -> DialogResponse {
        let (tx, rx) = oneshot::channel();
        {
            let mut pending = self.pending.lock();
            if let Some(previous) = pending.replace(tx) {
                debug!("dialog replaced before it was answered");
                let _ = previous.send(false);
            }
            self.state.set(DialogState {
                is_open: true,
                kind,
                message,
            });
        }
        debug!(?kind, "dialog opened");
        DialogResponse { rx }
    }
}
