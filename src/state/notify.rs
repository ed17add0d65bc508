//! Toast notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every module reports outcomes through this queue; the `Toasts` component
//! renders it and the notify util schedules auto-dismissal.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Info => "fa-info-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub persistent: bool,
}

#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl NotifyState {
    /// Queue a toast. Non-persistent toasts of the same kind are replaced.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, persistent: bool) -> u64 {
        self.toasts.retain(|t| t.persistent || t.kind != kind);
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into(), persistent });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
