//! Application Context
//!
//! Shared state provided via Leptos Context API: the toast notification
//! channel every action handler reports through.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen before auto-dismissing
const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient on-screen notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    /// Monotonic ticket so a stale auto-dismiss never clears a newer toast
    seq: u32,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed toast, if any - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Currently displayed toast - write
    set_toast: WriteSignal<Option<Toast>>,
    /// Ticket counter for toast supersession
    toast_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>)) -> Self {
        Self {
            toast: toast.0,
            set_toast: toast.1,
            toast_seq: StoredValue::new(0),
        }
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Success, message.into());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Error, message.into());
    }

    /// Dismiss the current toast immediately
    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }

    fn notify(&self, level: ToastLevel, message: String) {
        let seq = self.toast_seq.get_value() + 1;
        self.toast_seq.set_value(seq);
        self.set_toast.set(Some(Toast { message, level, seq }));

        let toast = self.toast;
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            // A newer toast may have replaced this one in the meantime
            if toast.get_untracked().is_some_and(|current| current.seq == seq) {
                set_toast.set(None);
            }
        });
    }
}
