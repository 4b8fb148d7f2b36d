//! Store - Observable value container
//!
//! A shared mutable value with listeners:
//! - `get()` / `with()` - Snapshot or borrowed read
//! - `set()` / `update()` - Replace and notify
//! - `subscribe()` - Listen for changes, returns cleanup to unsubscribe
//! - `to_signal()` - Mirror into a spark-signals `Signal` for deriveds/effects
//!
//! Notification is synchronous and runs listeners in registration order.
//! A new subscriber is called once immediately with the current value.
//!
//! # Example
//!
//! ```ignore
//! use spark_navigator::Store;
//!
//! let count = Store::new(0);
//! let cleanup = count.subscribe(|v| println!("count = {}", v));
//! count.set(1);
//! count.update(|v| v + 1);
//! cleanup();
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use spark_signals::{signal, Signal};

// =============================================================================
// TYPES
// =============================================================================

/// Cleanup function returned by [`Store::subscribe`].
///
/// Call it to remove the listener.
pub type Unsubscribe = Box<dyn FnOnce()>;

type Listener<T> = Rc<dyn Fn(&T)>;

struct StoreInner<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(usize, Listener<T>)>>,
    next_id: Cell<usize>,
    /// Deliveries waiting for the outermost `notify` to run them.
    pending: RefCell<VecDeque<(Listener<T>, T)>>,
    draining: Cell<bool>,
}

impl<T> StoreInner<T> {
    fn next_id(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

/// Observable value container.
///
/// Cloning a `Store` yields another handle to the same value and listeners.
pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Default + Clone + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &*self.inner.value.borrow())
            .field("subscribers", &self.inner.listeners.borrow().len())
            .finish()
    }
}

// =============================================================================
// READ / WRITE
// =============================================================================

impl<T: Clone + 'static> Store<T> {
    /// Create a store holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                value: RefCell::new(value),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Read the current value without cloning it.
    ///
    /// Do not write to this store from inside `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&self, value: T) {
        self.replace(value);
        self.notify();
    }

    /// Compute the next value from the current one, then notify.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = self.with(f);
        self.set(next);
    }

    /// Write without notifying. Pair with [`Store::notify`] to publish
    /// several stores before any of their listeners run.
    pub(crate) fn replace(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
    }

    /// Queue a delivery of the current value to every listener, then drain
    /// the queue unless an outer `notify` is already draining it.
    ///
    /// A `set` from inside a listener is delivered after the current round,
    /// so every listener sees values in write order and ends on the latest.
    pub(crate) fn notify(&self) {
        let snapshot = self.get();
        {
            let listeners = self.inner.listeners.borrow();
            let mut pending = self.inner.pending.borrow_mut();
            for (_, listener) in listeners.iter() {
                pending.push_back((listener.clone(), snapshot.clone()));
            }
            log::trace!("store: queued {} delivery(ies)", listeners.len());
        }

        if self.inner.draining.replace(true) {
            return;
        }

        loop {
            // Release the borrow before running the listener
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some((listener, value)) = next else {
                break;
            };
            listener(&value);
        }

        self.inner.draining.set(false);
    }
}

// =============================================================================
// SUBSCRIPTIONS
// =============================================================================

impl<T: Clone + 'static> Store<T> {
    /// Subscribe to changes.
    ///
    /// The listener runs immediately with the current value and again after
    /// every `set`/`update`. Returns cleanup to unsubscribe.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Unsubscribe {
        let listener: Listener<T> = Rc::new(listener);
        let id = self.inner.next_id();
        self.inner
            .listeners
            .borrow_mut()
            .push((id, listener.clone()));

        listener(&self.get());

        let weak: Weak<StoreInner<T>> = Rc::downgrade(&self.inner);
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .listeners
                    .borrow_mut()
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Mirror a projection of this store into a spark-signals `Signal`.
    ///
    /// The signal follows every change until the returned cleanup is called,
    /// so deriveds and effects can depend on store state.
    ///
    /// ```ignore
    /// let (depth, stop) = navigator.history.to_signal(|h| h.len());
    /// let _e = effect(move || println!("depth = {}", depth.get()));
    /// ```
    pub fn to_signal<U, F>(&self, project: F) -> (Signal<U>, Unsubscribe)
    where
        U: Clone + PartialEq + 'static,
        F: Fn(&T) -> U + 'static,
    {
        let mirrored = self.with(|value| signal(project(value)));
        let target = mirrored.clone();
        let cleanup = self.subscribe(move |value| {
            target.set(project(value));
        });
        (mirrored, cleanup)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::effect;

    #[test]
    fn test_get_set_update() {
        let store = Store::new(1);
        assert_eq!(store.get(), 1);

        store.set(5);
        assert_eq!(store.get(), 5);

        store.update(|v| v * 2);
        assert_eq!(store.get(), 10);
        assert_eq!(store.with(|v| *v + 1), 11);
    }

    #[test]
    fn test_subscribe_runs_immediately_then_on_every_write() {
        let store = Store::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();

        let _cleanup = store.subscribe(move |v| seen_clone.borrow_mut().push(*v));
        assert_eq!(*seen.borrow(), vec![0]);

        store.set(1);
        store.set(1); // No equality short-circuit
        store.update(|v| v + 1);

        assert_eq!(*seen.borrow(), vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let store = Store::new(());
        let order = Rc::new(RefCell::new(Vec::new()));

        let order_a = order.clone();
        let _a = store.subscribe(move |_| order_a.borrow_mut().push("a"));
        let order_b = order.clone();
        let _b = store.subscribe(move |_| order_b.borrow_mut().push("b"));

        order.borrow_mut().clear();
        store.set(());

        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_unsubscribe() {
        let store = Store::new(0);
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = store.subscribe(move |_| count_clone.set(count_clone.get() + 1));
        assert_eq!(count.get(), 1);
        assert_eq!(store.subscriber_count(), 1);

        cleanup();
        assert_eq!(store.subscriber_count(), 0);

        store.set(3);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_unsubscribe_after_store_dropped() {
        let store = Store::new(0);
        let cleanup = store.subscribe(|_| {});
        drop(store);

        // Must not panic
        cleanup();
    }

    #[test]
    fn test_listener_can_write_other_store_and_read_self() {
        let source = Store::new(1);
        let sink = Store::new(0);

        let sink_clone = sink.clone();
        let source_clone = source.clone();
        let _cleanup = source.subscribe(move |v| {
            // Reading the notifying store must not panic
            assert_eq!(source_clone.get(), *v);
            sink_clone.set(*v * 100);
        });

        source.set(2);
        assert_eq!(sink.get(), 200);
    }

    #[test]
    fn test_nested_set_delivers_in_write_order() {
        let store = Store::new(0);

        let store_clone = store.clone();
        let _a = store.subscribe(move |v| {
            if *v == 1 {
                store_clone.set(2);
            }
        });

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _b = store.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        store.set(1);

        assert_eq!(store.get(), 2);
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);

        // Queue is drained; later writes still notify
        store.set(3);
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_clone_shares_state() {
        let a = Store::new(String::from("home"));
        let b = a.clone();

        b.set(String::from("profile"));
        assert_eq!(a.get(), "profile");
    }

    #[test]
    fn test_replace_then_notify_publishes_both() {
        let left = Store::new(0);
        let right = Store::new(0);

        let seen = Rc::new(Cell::new((0, 0)));
        let seen_clone = seen.clone();
        let right_clone = right.clone();
        let _cleanup = left.subscribe(move |l| seen_clone.set((*l, right_clone.get())));

        left.replace(1);
        right.replace(2);
        left.notify();
        right.notify();

        // Left's listener already saw right's new value
        assert_eq!(seen.get(), (1, 2));
    }

    #[test]
    fn test_to_signal_follows_store() {
        let store = Store::new(vec![1, 2]);
        let (len, stop) = store.to_signal(|v| v.len());
        assert_eq!(len.get(), 2);

        let runs = Rc::new(Cell::new(0));
        let runs_clone = runs.clone();
        let len_clone = len.clone();
        let _e = effect(move || {
            let _ = len_clone.get();
            runs_clone.set(runs_clone.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        store.update(|v| {
            let mut next = v.clone();
            next.push(3);
            next
        });
        assert_eq!(len.get(), 3);
        assert_eq!(runs.get(), 2);

        stop();
        store.set(Vec::new());
        assert_eq!(len.get(), 3);
    }
}
