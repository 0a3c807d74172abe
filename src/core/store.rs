//! Shared state container with subscribe/notify.
//!
//! A [`Store`] owns a value behind an `Arc`, so clones observe the same state
//! and the container satisfies the `Send + Sync` bound Leptos puts on context
//! values. Listeners receive a snapshot taken after every update and run
//! outside of any lock, so they may read the store again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: RwLock<T>,
    listeners: Mutex<Vec<(u64, Listener<T>)>>,
    next_id: AtomicU64,
}

/// Observable state container
pub struct Store<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Read the current value
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self
            .inner
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Clone of the current value
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    /// Mutate the value and notify every listener
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, snapshot) = {
            let mut guard = self
                .inner
                .value
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let result = f(&mut guard);
            (result, guard.clone())
        };
        self.notify(&snapshot);
        result
    }

    /// Register a listener; it stays registered until the returned
    /// [`Subscription`] is dropped
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));

        let weak: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .listeners
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, snapshot: &T) {
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in &listeners {
            listener(snapshot);
        }
    }
}

/// Handle returned by [`Store::subscribe`]; unsubscribes on drop
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Keep the listener registered for the lifetime of the store
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_is_visible_through_clones() {
        let store = Store::new(1u32);
        let other = store.clone();
        store.update(|v| *v += 1);
        assert_eq!(other.get(), 2);
    }

    #[test]
    fn test_update_returns_closure_result() {
        let store = Store::new(vec![1, 2, 3]);
        let popped = store.update(|v| v.pop());
        assert_eq!(popped, Some(3));
        assert_eq!(store.with(|v| v.len()), 2);
    }

    #[test]
    fn test_listener_sees_new_value() {
        let store = Store::new(String::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |v: &String| sink.lock().unwrap().push(v.clone()));

        store.update(|v| v.push('a'));
        store.update(|v| v.push('b'));

        assert_eq!(*seen.lock().unwrap(), vec!["a".to_string(), "ab".to_string()]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let store = Store::new(0u8);
        let calls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&calls);
        let sub = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.update(|v| *v = 1);
        drop(sub);
        store.update(|v| *v = 2);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_detach_keeps_listener() {
        let store = Store::new(0u8);
        store.subscribe(|_| {}).detach();
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn test_listener_may_read_store() {
        let store = Store::new(5i32);
        let reader = store.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |_| {
            *sink.lock().unwrap() = Some(reader.get());
        });
        store.update(|v| *v = 9);
        assert_eq!(*seen.lock().unwrap(), Some(9));
    }
}
