//! Observable state container
//!
//! View-models expose their screen state through [`Observable`] fields.
//! Writes that change the value notify every subscriber; writes that leave it
//! equal are silent. Subscribers are tokio `watch` receivers, so a screen can
//! poll `has_changed` on its event loop or await `changed`.

use std::fmt;
use tokio::sync::watch;

/// A value that notifies subscribers when it changes
///
/// # Example
///
/// ```rust
/// use app_state::Observable;
///
/// let sheet_active = Observable::new(false);
/// let mut rx = sheet_active.subscribe();
///
/// assert!(sheet_active.set(true));
/// assert!(rx.has_changed().unwrap());
/// assert!(*rx.borrow_and_update());
///
/// // Same value again: no notification
/// assert!(!sheet_active.set(true));
/// assert!(!rx.has_changed().unwrap());
/// ```
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T> Observable<T> {
    /// Create with an initial value
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(value);
        Self { tx }
    }

    /// Read the current value through a closure
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Subscribe to changes
    ///
    /// A new receiver starts with the current value marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone> Observable<T> {
    /// Get a copy of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: PartialEq> Observable<T> {
    /// Replace the value, notifying only if it differs
    ///
    /// Returns whether subscribers were notified.
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current != value {
                *current = value;
                true
            } else {
                false
            }
        })
    }
}

impl<T: Clone + PartialEq> Observable<T> {
    /// Modify the value in place, notifying only if it changed
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        self.tx.send_if_modified(|current| {
            let before = current.clone();
            f(current);
            *current != before
        })
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.tx.borrow())
            .field("subscribers", &self.tx.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_get_and_set() {
        let value = Observable::new(1);
        assert_eq!(value.get(), 1);
        assert!(value.set(2));
        assert_eq!(value.get(), 2);
    }

    #[test]
    fn test_set_same_value_is_silent() {
        let value = Observable::new("a".to_string());
        let mut rx = value.subscribe();

        assert!(!value.set("a".to_string()));
        assert!(!rx.has_changed().unwrap());

        assert!(value.set("b".to_string()));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "b");
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_update_in_place() {
        let list = Observable::new(vec![1, 2]);
        let mut rx = list.subscribe();

        assert!(list.update(|v| v.push(3)));
        assert_eq!(*rx.borrow_and_update(), vec![1, 2, 3]);

        assert!(!list.update(|v| v.retain(|_| true)));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_multiple_subscribers() {
        let value = Observable::new(0u8);
        let mut a = value.subscribe();
        let mut b = value.subscribe();
        assert_eq!(value.subscriber_count(), 2);

        value.set(7);
        assert_eq!(*a.borrow_and_update(), 7);
        assert_eq!(*b.borrow_and_update(), 7);

        drop(a);
        assert_eq!(value.subscriber_count(), 1);
    }

    #[test]
    fn test_with_reads_without_clone() {
        let value = Observable::new(vec![1, 2, 3]);
        assert_eq!(value.with(|v| v.len()), 3);
    }

    #[test]
    fn test_default() {
        let value: Observable<bool> = Observable::default();
        assert!(!value.get());
    }

    #[tokio::test]
    async fn test_changed_wakes_subscriber() {
        let value = std::sync::Arc::new(Observable::new(false));
        let mut rx = value.subscribe();

        let writer = value.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            writer.set(true);
        });

        tokio::time::timeout(Duration::from_secs(1), rx.changed())
            .await
            .unwrap()
            .unwrap();
        assert!(*rx.borrow());
    }
}
