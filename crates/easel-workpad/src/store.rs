//! Process-wide state store with an explicit lifecycle.
//!
//! The rendering host owns the store: it creates it with the initial
//! state, subscribes page hosts, and tears subscriptions down when
//! views unmount. Listeners always observe a consistent snapshot taken
//! after the write lock drops.

use crate::state::WorkpadState;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle returned by [`StateStore::subscribe`], used for teardown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&WorkpadState) + Send + Sync>;

/// Owns the workpad state and notifies subscribers on every commit.
///
/// Listeners run synchronously after each [`update`](Self::update),
/// outside the state lock but under the subscriber registry lock:
/// a listener must not subscribe or unsubscribe from within its own
/// notification.
pub struct StateStore {
    state: RwLock<WorkpadState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl fmt::Debug for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStore")
            .field("state", &*self.state.read())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

impl StateStore {
    /// Store initialized with the given state
    #[must_use]
    pub fn new(initial: WorkpadState) -> Self {
        Self {
            state: RwLock::new(initial),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Consistent snapshot of the current state
    #[must_use]
    pub fn snapshot(&self) -> WorkpadState {
        self.state.read().clone()
    }

    /// Register a listener invoked on every committed change
    pub fn subscribe(
        &self,
        listener: impl Fn(&WorkpadState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Box::new(listener)));
        tracing::debug!(id = id.0, "state store subscription added");
        id
    }

    /// Remove a listener; unknown ids are a no-op
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = listeners.len() < before;
        if removed {
            tracing::debug!(id = id.0, "state store subscription removed");
        }
        removed
    }

    /// Mutate the state and notify all subscribers with the new snapshot
    pub fn update(&self, mutate: impl FnOnce(&mut WorkpadState)) {
        let snapshot = {
            let mut state = self.state.write();
            mutate(&mut state);
            state.clone()
        };

        let listeners = self.listeners.lock();
        for (_, listener) in listeners.iter() {
            listener(&snapshot);
        }
    }

    /// Number of live subscriptions
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().len()
    }
}
