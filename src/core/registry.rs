//! # Observer registry - ordered, copy-on-write membership.
//!
//! Holds the observers that will receive the next broadcast, in insertion order.
//!
//! ## Architecture
//! ```text
//! add(obs) / remove(&obs)                 snapshot()
//!        │                                    │
//!        ▼                                    ▼
//!   write lock ─► Arc::make_mut(vec)     read lock ─► Arc::clone(vec) ─► unlock
//!                  (clones only if a                     │
//!                   snapshot still holds it)             ▼
//!                                               upgrade weak slots ─► Snapshot
//! ```
//!
//! ## Rules
//! - Insertion order is delivery order.
//! - Duplicates are allowed and are notified once per registration.
//! - `remove` drops the **first** slot with the same identity (`Arc` address);
//!   removing an absent observer is a no-op.
//! - The lock is never held while observer code runs, so a hook may add or
//!   remove observers (its own slot included); the change applies from the
//!   next snapshot on.
//! - Weak slots do not keep their observer alive. Once the owner drops it, the
//!   slot is skipped by snapshots and discarded on the next `remove`.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::observers::Observe;

/// One registration.
#[derive(Clone)]
enum Slot {
    Strong(Arc<dyn Observe>),
    Weak(Weak<dyn Observe>),
}

impl Slot {
    fn upgrade(&self) -> Option<Arc<dyn Observe>> {
        match self {
            Slot::Strong(o) => Some(Arc::clone(o)),
            Slot::Weak(w) => w.upgrade(),
        }
    }

    /// Allocation address, used as identity.
    fn addr(&self) -> *const () {
        match self {
            Slot::Strong(o) => Arc::as_ptr(o).cast::<()>(),
            Slot::Weak(w) => w.as_ptr().cast::<()>(),
        }
    }

    fn is_live(&self) -> bool {
        match self {
            Slot::Strong(_) => true,
            Slot::Weak(w) => w.strong_count() > 0,
        }
    }
}

/// Ordered collection of registered observers.
#[derive(Default)]
pub struct ObserverRegistry {
    slots: RwLock<Arc<Vec<Slot>>>,
}

impl ObserverRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer sharing ownership with the caller.
    pub fn add(&self, observer: Arc<dyn Observe>) {
        tracing::debug!(observer = observer.name(), "observer added");
        self.push(Slot::Strong(observer));
    }

    /// Appends an observer without keeping it alive.
    ///
    /// When every strong reference held elsewhere is dropped, the observer
    /// silently stops receiving events; no `remove` is required.
    pub fn add_weak(&self, observer: Weak<dyn Observe>) {
        self.push(Slot::Weak(observer));
    }

    fn push(&self, slot: Slot) {
        let mut slots = self.slots.write();
        Arc::make_mut(&mut *slots).push(slot);
    }

    /// Removes the first registration of `observer` (by identity).
    ///
    /// Returns `false` if it was not registered. Dead weak slots are discarded
    /// as part of the same write.
    pub fn remove<O: Observe + ?Sized>(&self, observer: &Arc<O>) -> bool {
        let target = Arc::as_ptr(observer).cast::<()>();
        let mut slots = self.slots.write();

        let Some(idx) = slots.iter().position(|s| s.addr() == target) else {
            if slots.iter().any(|s| !s.is_live()) {
                Arc::make_mut(&mut *slots).retain(Slot::is_live);
            }
            return false;
        };

        let v = Arc::make_mut(&mut *slots);
        v.remove(idx);
        v.retain(Slot::is_live);
        true
    }

    /// True if `observer` is registered and alive.
    pub fn contains<O: Observe + ?Sized>(&self, observer: &Arc<O>) -> bool {
        let target = Arc::as_ptr(observer).cast::<()>();
        self.slots
            .read()
            .iter()
            .any(|s| s.addr() == target && s.is_live())
    }

    /// Returns a frozen copy of the current membership, in order.
    ///
    /// Later `add`/`remove` calls do not affect a snapshot already taken.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let slots = Arc::clone(&*self.slots.read());
        Snapshot {
            observers: slots.iter().filter_map(Slot::upgrade).collect(),
        }
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.read().iter().filter(|s| s.is_live()).count()
    }

    /// True if no live observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Point-in-time view of the registry used for one broadcast.
#[derive(Clone, Default)]
pub struct Snapshot {
    observers: Vec<Arc<dyn Observe>>,
}

impl Snapshot {
    /// Iterates observers in delivery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<dyn Observe>> {
        self.observers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Observer names in delivery order.
    pub fn names(&self) -> Vec<&'static str> {
        self.observers.iter().map(|o| o.name()).collect()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Arc<dyn Observe>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn Observe>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
