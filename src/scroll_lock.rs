use std::cell::Cell;
use std::rc::Rc;

/// Page-wide scroll lock shared between the page and the deck.
///
/// Only a [`ScrollLockGuard`] can hold the lock, and dropping the guard
/// releases it, so every way a gesture can end gives the page its scroll back.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Rc<Cell<bool>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.locked.set(true);
        ScrollLockGuard {
            locked: Rc::clone(&self.locked),
        }
    }
}

#[derive(Debug)]
pub struct ScrollLockGuard {
    locked: Rc<Cell<bool>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locked.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert!(lock.clone().is_locked());

        drop(guard);
        assert!(!lock.is_locked());
    }
}
