//! Open/close bookkeeping for the booking overlay.

use crate::booking::scroll_lock::{ScrollLock, ScrollLockGuard, ScrollTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    EscapeKey,
}

impl CloseTrigger {
    pub fn from_key(key: &str) -> Option<Self> {
        matches!(key, "Escape" | "Esc").then_some(CloseTrigger::EscapeKey)
    }
}

/// Holds the page scroll lock from opening until the first close, or until
/// the session is dropped with the overlay still open.
pub struct ModalSession<T: ScrollTarget> {
    guard: Option<ScrollLockGuard<T>>,
}

impl<T: ScrollTarget> ModalSession<T> {
    pub fn open(lock: &ScrollLock<T>) -> Self {
        Self { guard: Some(lock.acquire()) }
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    /// Releases the lock. Only the first close counts; later ones return false.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        match self.guard.take() {
            Some(guard) => {
                log::debug!("Booking overlay closed via {:?}", trigger);
                drop(guard);
                true
            }
            None => false,
        }
    }
}
