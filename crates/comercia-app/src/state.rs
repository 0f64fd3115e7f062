//! # Observable State Cell
//!
//! Single-writer observable container for view-facing state. Reads are
//! synchronous snapshots, mutation goes through closures so every
//! change notifies observers in one step, and observers subscribe
//! through a watch channel.

use tokio::sync::watch;

/// Observable state container.
///
/// Backed by [`tokio::sync::watch`], so observers see the latest value
/// rather than every intermediate one.
#[derive(Debug)]
pub struct StateCell<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> StateCell<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clones the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Reads through a shared borrow without cloning.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Applies `f` to the value and notifies observers.
    pub fn mutate(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Registers an observer. The receiver holds the current value and
    /// wakes on every subsequent mutation.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_a_snapshot() {
        let cell = StateCell::new(1u32);
        let before = cell.get();
        cell.mutate(|n| *n += 1);

        assert_eq!(before, 1);
        assert_eq!(cell.get(), 2);
    }

    #[tokio::test]
    async fn test_mutation_wakes_subscribers() {
        let cell = StateCell::new(String::from("initial"));
        let mut observer = cell.subscribe();

        cell.mutate(|s| s.push_str(" changed"));

        observer.changed().await.unwrap();
        assert_eq!(*observer.borrow(), "initial changed");
    }

    #[test]
    fn test_read_borrows_without_cloning() {
        let cell = StateCell::new(vec![1, 2, 3]);

        let len = cell.read(|v| v.len());

        assert_eq!(len, 3);
    }
}
