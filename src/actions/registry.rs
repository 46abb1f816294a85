//! Ordered callback lists keyed by state, state pair or (state, input).

use super::action::SharedAction;
use std::collections::HashMap;
use std::hash::Hash;

/// Callbacks grouped by key, each group kept in registration order.
///
/// Looking up a key with nothing registered is not an error: it yields an
/// empty slice, which is the common case.
///
/// The engine keeps four of these: entry and exit actions keyed by a state,
/// input actions keyed by `(state, input)` and transition actions keyed by
/// `(source, target)`.
pub struct ActionRegistry<K, E> {
    actions: HashMap<K, Vec<SharedAction<E>>>,
}

impl<K: Eq + Hash, E> ActionRegistry<K, E> {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Append `action` to the list for `key`, creating the list on first use.
    pub fn register(&mut self, key: K, action: SharedAction<E>) {
        self.actions.entry(key).or_default().push(action);
    }

    /// Callbacks for `key` in registration order.
    pub fn lookup(&self, key: &K) -> &[SharedAction<E>] {
        self.actions.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Run the callbacks for `key` in order, stopping at the first failure.
    pub fn run(&self, key: &K) -> Result<(), E> {
        self.lookup(key).iter().try_for_each(|action| action.invoke())
    }

    /// Total number of callbacks across all keys.
    pub fn len(&self) -> usize {
        self.actions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<K: Eq + Hash, E> Default for ActionRegistry<K, E> {
    fn default() -> Self {
        Self::new()
    }
}
