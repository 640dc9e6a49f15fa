//! Widget state sets and the state-key interner
//!
//! A [`StateSet`] holds the boolean states a widget is currently in
//! (`pressed`, `focused`, `selected`, ...). Only membership matters; the
//! order in which states were added never influences resolution or caching.
//!
//! The interner maps each distinct state name to a stable small integer so
//! the cache can build a compact, order-independent key from a set of active
//! states. Slot `0` is reserved for the appearance id; state keys start at
//! `1` and are never reused for a different name.

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::RwLock;

/// Set of active boolean widget states.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateSet {
    names: FxHashSet<String>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state; returns `false` if it was already set.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Remove a state; returns `true` if it was set.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the active state names (no defined order).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for StateSet {
    fn from(names: [S; N]) -> Self {
        names.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Interner assigning each distinct state name a stable key.
///
/// Keys are monotonically increasing from `1` (`0` is the reserved
/// appearance-id slot) and live for the lifetime of the interner. There is
/// no removal. Allocation happens under the write lock, so two concurrent
/// callers can never assign different keys to the same name.
#[derive(Debug, Default)]
pub(crate) struct StateKeyInterner {
    table: RwLock<FxHashMap<String, u32>>,
}

impl StateKeyInterner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Key for `name`, allocating the next free key on first sight.
    pub(crate) fn intern(&self, name: &str) -> u32 {
        if let Some(&key) = self.table.read().unwrap().get(name) {
            return key;
        }

        let mut table = self.table.write().unwrap();
        // Entries are never removed, so len() + 1 is the next free key even
        // if another writer slipped in between the two locks.
        let next = table.len() as u32 + 1;
        *table.entry(name.to_owned()).or_insert(next)
    }
}
