//! Toast notification state shared across pages and operations.
//!
//! DESIGN
//! ======
//! Credential operations and page mutations push here; the `Toaster`
//! component renders and expires the queue. Keeping this in context means
//! notifications survive route changes mid-operation.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;
use uuid::Uuid;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        }
    }
}

/// CSS class pair for a toast card.
pub fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Reactive notification queue, cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct NotifyStore {
    toasts: RwSignal<Vec<Toast>>,
}

impl NotifyStore {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Reactive read of the queue, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Success, message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Error, message));
    }

    /// Remove a toast by id; unknown ids are ignored (the auto-dismiss timer
    /// can race a manual close).
    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|queue| queue.retain(|toast| toast.id != id));
    }

    fn push(&self, toast: Toast) {
        self.toasts.update(|queue| queue.push(toast));
    }
}

impl Default for NotifyStore {
    fn default() -> Self {
        Self::new()
    }
}
