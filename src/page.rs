//! The page the components are mounted into
//!
//! `PageSurface` stands in for the document: whether scrolling is suppressed
//! and which global key listeners are live. Components borrow these through
//! RAII tokens. Releasing a token is idempotent, and dropping it releases it,
//! so every exit path restores the page exactly once.

use crossterm::event::KeyCode;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct PageInner {
    scroll_locks: usize,
    /// Times scrolling went from locked back to free
    restores: usize,
    listeners: Vec<(u64, KeyCode)>,
    next_listener: u64,
}

/// Shared handle to page-level state; clones see the same page
#[derive(Debug, Clone, Default)]
pub struct PageSurface {
    inner: Rc<RefCell<PageInner>>,
}

impl PageSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress page scrolling until the token is released
    pub fn lock_scroll(&self) -> ScrollLock {
        self.inner.borrow_mut().scroll_locks += 1;
        ScrollLock {
            page: self.clone(),
            released: false,
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.inner.borrow().scroll_locks > 0
    }

    pub fn restore_count(&self) -> usize {
        self.inner.borrow().restores
    }

    /// Register a global listener for `key`
    pub fn listen(&self, key: KeyCode) -> KeyListener {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, key));
        KeyListener {
            page: self.clone(),
            id,
            key,
            released: false,
        }
    }

    pub fn has_listener(&self, key: KeyCode) -> bool {
        self.inner.borrow().listeners.iter().any(|(_, k)| *k == key)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

#[derive(Debug)]
pub struct ScrollLock {
    page: PageSurface,
    released: bool,
}

impl ScrollLock {
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let mut inner = self.page.inner.borrow_mut();
        inner.scroll_locks = inner.scroll_locks.saturating_sub(1);
        if inner.scroll_locks == 0 {
            inner.restores += 1;
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.release();
    }
}

#[derive(Debug)]
pub struct KeyListener {
    page: PageSurface,
    id: u64,
    key: KeyCode,
    released: bool,
}

impl KeyListener {
    pub fn key(&self) -> KeyCode {
        self.key
    }

    /// Live listeners fire for their key
    pub fn matches(&self, key: KeyCode) -> bool {
        !self.released && self.key == key
    }

    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let id = self.id;
        self.page
            .inner
            .borrow_mut()
            .listeners
            .retain(|(listener, _)| *listener != id);
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_lock_restores_once() {
        let page = PageSurface::new();
        let mut lock = page.lock_scroll();
        assert!(page.is_scroll_locked());

        lock.release();
        lock.release();
        drop(lock);
        assert!(!page.is_scroll_locked());
        assert_eq!(page.restore_count(), 1);
    }

    #[test]
    fn nested_locks_restore_when_last_releases() {
        let page = PageSurface::new();
        let a = page.lock_scroll();
        let b = page.lock_scroll();
        drop(a);
        assert!(page.is_scroll_locked());
        drop(b);
        assert!(!page.is_scroll_locked());
        assert_eq!(page.restore_count(), 1);
    }

    #[test]
    fn listener_removed_on_drop() {
        let page = PageSurface::new();
        let esc = page.listen(KeyCode::Esc);
        let other = page.listen(KeyCode::Char('q'));
        assert!(page.has_listener(KeyCode::Esc));
        assert!(esc.matches(KeyCode::Esc));
        assert!(!esc.matches(KeyCode::Enter));

        drop(esc);
        assert!(!page.has_listener(KeyCode::Esc));
        assert_eq!(page.listener_count(), 1);
        drop(other);
        assert_eq!(page.listener_count(), 0);
    }
}
