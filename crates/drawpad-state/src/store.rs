//! Observable value containers.

use std::fmt;
use tokio::sync::watch;

/// A value that can be read, replaced, edited in place, and watched.
///
/// Every write notifies subscribers; readers never block writers for longer
/// than a clone.
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T> Store<T> {
    /// Creates a store holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replaces the value, returning the previous one.
    pub fn set(&self, value: T) -> T {
        self.tx.send_replace(value)
    }

    /// Edits the value in place and notifies subscribers.
    pub fn update(&self, edit: impl FnOnce(&mut T)) {
        self.tx.send_modify(edit);
    }

    /// Edits the value in place; subscribers are notified only if `edit`
    /// returns true.
    pub fn update_if(&self, edit: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(edit)
    }

    /// Reads the value without cloning it.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.tx.borrow())
    }

    /// A receiver that wakes on every later write.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> Store<T> {
    /// A copy of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Store").field(&*self.tx.borrow()).finish()
    }
}

impl Store<bool> {
    /// Sets the flag if it is clear and returns a guard that clears it again
    /// on drop. Returns `None` when the flag is already raised.
    pub fn try_raise(&self) -> Option<FlagGuard<'_>> {
        let raised = self.update_if(|flag| {
            if *flag {
                false
            } else {
                *flag = true;
                true
            }
        });
        raised.then_some(FlagGuard { flag: self })
    }
}

/// Clears a raised [`Store<bool>`] when dropped.
#[must_use = "the flag is cleared as soon as the guard is dropped"]
#[derive(Debug)]
pub struct FlagGuard<'a> {
    flag: &'a Store<bool>,
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
