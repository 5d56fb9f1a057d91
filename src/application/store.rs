//! Observable UI state
//!
//! `UiStore` is the single place the current directory, tree, selection,
//! loading flag and last error live. It is created by the host and handed to
//! the controller; views subscribe to it. Listeners are called after the
//! internal lock is released, so a listener may read the store again.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::SelectionSet;

/// Snapshot of everything a view renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub current_dir: Option<PathBuf>,
    pub selection: SelectionSet,
    pub tree: Vec<TreeNode>,
    pub loading: bool,
    pub error: Option<String>,
}

type Listener = Arc<dyn Fn(&UiState) + Send + Sync>;

#[derive(Default)]
struct Inner {
    state: UiState,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Shared, observable UI state
#[derive(Clone, Default)]
pub struct UiStore {
    inner: Arc<Mutex<Inner>>,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> UiState {
        lock(&self.inner).state.clone()
    }

    /// Mutate the state, then notify every listener
    pub fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut UiState),
    {
        let (state, listeners) = {
            let mut inner = lock(&self.inner);
            mutate(&mut inner.state);
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (inner.state.clone(), listeners)
        };

        for listener in listeners {
            listener(&state);
        }
    }

    /// Register a listener; it stays registered until the returned
    /// `Subscription` is dropped or `unsubscribe`d
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&UiState) + Send + Sync + 'static,
    {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));

        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

impl std::fmt::Debug for UiStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("UiStore")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Handle that keeps a listener registered
pub struct Subscription {
    store: Weak<Mutex<Inner>>,
    id: u64,
}

impl Subscription {
    /// Remove the listener now
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            lock(&inner).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// A listener that panicked poisons the lock; the state itself is still
/// consistent because listeners never run under it.
fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn listeners_see_updates() {
        let store = UiStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |s| sink.lock().unwrap().push(s.loading));

        store.update(|s| s.loading = true);
        store.update(|s| s.loading = false);

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let store = UiStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let sub = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.update(|s| s.error = Some("x".to_string()));
        drop(sub);
        store.update(|s| s.error = None);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn explicit_unsubscribe_only_removes_its_listener() {
        let store = UiStore::new();
        let a = store.subscribe(|_| {});
        let _b = store.subscribe(|_| {});

        a.unsubscribe();

        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn listener_may_read_the_store() {
        let store = UiStore::new();
        let reader = store.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |_| {
            *sink.lock().unwrap() = reader.snapshot().current_dir;
        });

        store.update(|s| s.current_dir = Some(PathBuf::from("/work")));

        assert_eq!(*seen.lock().unwrap(), Some(PathBuf::from("/work")));
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = UiStore::new();
        let sub = store.subscribe(|_| {});
        drop(store);
        drop(sub);
    }
}
