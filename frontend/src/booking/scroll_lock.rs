//! Reference-counted page scroll lock.
//!
//! Every open overlay holds a [`ScrollLockGuard`]; the page scrolls again
//! only once the last guard is dropped.

use std::cell::Cell;
use std::rc::Rc;

pub trait ScrollTarget {
    fn set_scroll_locked(&self, locked: bool);
}

struct LockInner<T: ScrollTarget> {
    target: T,
    holders: Cell<usize>,
}

pub struct ScrollLock<T: ScrollTarget> {
    inner: Rc<LockInner<T>>,
}

impl<T: ScrollTarget> Clone for ScrollLock<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard<T: ScrollTarget> {
    inner: Rc<LockInner<T>>,
}

impl<T: ScrollTarget> ScrollLock<T> {
    pub fn new(target: T) -> Self {
        Self {
            inner: Rc::new(LockInner { target, holders: Cell::new(0) }),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard<T> {
        let holders = self.inner.holders.get();
        if holders == 0 {
            self.inner.target.set_scroll_locked(true);
        }
        self.inner.holders.set(holders + 1);
        ScrollLockGuard { inner: Rc::clone(&self.inner) }
    }

    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }
}

impl<T: ScrollTarget> Drop for ScrollLockGuard<T> {
    fn drop(&mut self) {
        let holders = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(holders);
        if holders == 0 {
            self.inner.target.set_scroll_locked(false);
        }
    }
}

/// `overflow: hidden` on the document body.
pub struct DocumentBody;

impl ScrollTarget for DocumentBody {
    fn set_scroll_locked(&self, locked: bool) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let style = body.style();
            let result = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
            if let Err(e) = result {
                log::warn!("Failed to toggle page scroll lock: {:?}", e);
            }
        }
    }
}

thread_local! {
    static PAGE_SCROLL_LOCK: ScrollLock<DocumentBody> = ScrollLock::new(DocumentBody);
}

/// The lock shared by every overlay on the page.
pub fn page_scroll_lock() -> ScrollLock<DocumentBody> {
    PAGE_SCROLL_LOCK.with(ScrollLock::clone)
}
