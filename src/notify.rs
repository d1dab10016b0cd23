//! Error Notification State
//!
//! One status message at a time, auto-cleared three seconds after it was
//! shown. Showing a newer message first cancels the pending expiry so a
//! stale timer cannot clear it early.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::models::Notice;

/// Auto-clear window for a visible notice.
const AUTO_CLEAR_MS: u32 = 3_000;

/// Single-slot notice machine shared via context
#[derive(Clone, Copy)]
pub struct NoticeState {
    current: RwSignal<Notice>,
    // Timeout is not Send, so the handle lives in local storage
    expiry: StoredValue<Option<Timeout>, LocalStorage>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(Notice::None),
            expiry: StoredValue::new_local(None),
        }
    }

    /// Read handle for the view layer.
    pub fn current(&self) -> ReadSignal<Notice> {
        self.current.read_only()
    }

    /// Shows a notice, replacing any visible one and its pending expiry.
    pub fn show(&self, notice: Notice) {
        self.cancel_expiry();
        self.current.set(notice);

        // the spent handle stays in the slot until the next show or clear;
        // dropping an already-fired timeout is harmless
        let current = self.current;
        self.expiry.set_value(Some(Timeout::new(AUTO_CLEAR_MS, move || {
            current.set(Notice::None);
        })));
    }

    /// Clears the slot: a new operation starting, or a manual dismiss.
    pub fn clear(&self) {
        self.cancel_expiry();
        if self.current.get_untracked() != Notice::None {
            self.current.set(Notice::None);
        }
    }

    fn cancel_expiry(&self) {
        // dropping the handle cancels the scheduled callback
        self.expiry.update_value(|slot| drop(slot.take()));
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}
