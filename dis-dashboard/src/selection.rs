//! The shared hover selection.
//!
//! `SelectionState` is a small observable cell: at most one active join key,
//! plus an ordered list of listeners that are called synchronously on every
//! mutation. Cloning it yields another handle to the same cell, which is how
//! the dashboard hands it to each child view.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use dis_core::JoinKey;

type Listener = Rc<dyn Fn(Option<JoinKey>)>;

/// Handle returned by [`SelectionState::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Inner {
    active: Cell<Option<JoinKey>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

#[derive(Clone, Default)]
pub struct SelectionState {
    inner: Rc<Inner>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<JoinKey> {
        self.inner.active.get()
    }

    /// Make `key` the active key, replacing any previous one, and notify.
    pub fn set_active(&self, key: JoinKey) {
        log::debug!("[Disability] selection: active = {}", key);
        self.inner.active.set(Some(key));
        self.notify();
    }

    /// Drop the active key and notify.
    pub fn clear(&self) {
        log::debug!("[Disability] selection: cleared");
        self.inner.active.set(None);
        self.notify();
    }

    /// Register `listener`; it runs after every later mutation, after all
    /// listeners registered before it.
    pub fn subscribe(&self, listener: impl Fn(Option<JoinKey>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.inner
            .listeners
            .borrow()
            .iter()
            .any(|(lid, _)| *lid == id)
    }

    // The list is snapshotted so listeners can subscribe, unsubscribe or
    // mutate the selection while being notified. Each listener receives the
    // value current at the moment it is called.
    fn notify(&self) {
        let snapshot: Vec<(SubscriptionId, Listener)> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();
        for (id, listener) in snapshot {
            if self.is_subscribed(id) {
                listener(self.current());
            }
        }
    }
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("active", &self.current())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
