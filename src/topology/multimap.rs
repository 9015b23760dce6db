//! MultiMap: keys associated with ordered lists of values.
//!
//! Each key owns a list of values addressed by slot `0..count`. Appending
//! fills the next slot; removal swaps the removed slot with the top one and
//! drops the top, so it never leaves gaps but does not preserve the order of
//! the remaining values.

use std::hash::Hash;

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshHashError;
use crate::perf::FastMap;

/// Key → ordered values table, used standalone and for connectivity.
///
/// # Invariants
///
/// - A key is present iff it has at least one value.
#[derive(Clone, Debug)]
pub struct MultiMap<K, V> {
    table: FastMap<K, Vec<V>>,
}

impl<K, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self {
            table: FastMap::default(),
        }
    }
}

impl<K: Eq + Hash, V> MultiMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` as the new top slot of `key`.
    pub fn add(&mut self, key: K, value: V) {
        self.table.entry(key).or_default().push(value);
    }

    /// Values of `key` in slot order; empty if the key is absent.
    pub fn get(&self, key: &K) -> impl Iterator<Item = &V> {
        self.slots(key).iter()
    }

    /// Values of `key` as a slice, in slot order.
    pub fn slots(&self, key: &K) -> &[V] {
        self.table.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of values associated with `key` (0 if absent).
    pub fn connexity(&self, key: &K) -> usize {
        self.table.get(key).map_or(0, Vec::len)
    }

    /// True if `key` is associated with at least one value.
    pub fn contains(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    /// Number of (key, value) associations.
    pub fn len(&self) -> usize {
        self.table.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Drop every value of `key`, returning them in slot order.
    pub fn remove_key(&mut self, key: &K) -> Vec<V> {
        self.table.remove(key).unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// All (key, value) pairs; keys in arbitrary order, values in slot order.
    pub fn items(&self) -> impl Iterator<Item = (&K, &V)> {
        self.table
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k, v)))
    }

    /// Each key once, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.table.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.table.values().flatten()
    }

    /// Add every pair from `other`.
    pub fn update<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in other {
            self.add(k, v);
        }
    }

    fn drop_if_empty(&mut self, key: &K) {
        if self.table.get(key).is_some_and(Vec::is_empty) {
            self.table.remove(key);
        }
    }
}

impl<K: Eq + Hash, V: PartialEq> MultiMap<K, V> {
    /// Remove one association of `value` with `key`.
    ///
    /// Slots are scanned from the top down; the first match is swapped with
    /// the top slot, which is then dropped. Cost is the distance from the
    /// match to the top.
    ///
    /// # Errors
    /// `MissingKey` if `key` has no value, `MissingValue` if `value` is not
    /// among its slots.
    pub fn remove(&mut self, key: &K, value: &V) -> Result<(), MeshHashError> {
        let slots = self.table.get_mut(key).ok_or(MeshHashError::MissingKey)?;
        let i = slots
            .iter()
            .rposition(|v| v == value)
            .ok_or(MeshHashError::MissingValue)?;
        slots.swap_remove(i);
        self.drop_if_empty(key);
        Ok(())
    }

    /// Remove every association of `value` with `key`; never fails.
    pub fn discard(&mut self, key: &K, value: &V) {
        let Some(slots) = self.table.get_mut(key) else {
            return;
        };
        // slots above `i` are already checked when the top is swapped down
        for i in (0..slots.len()).rev() {
            if slots[i] == *value {
                slots.swap_remove(i);
            }
        }
        self.drop_if_empty(key);
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for MultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MultiMap::new();
        map.update(iter);
        map
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for MultiMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl<K: Eq + Hash + std::fmt::Debug, V> DebugInvariants for MultiMap<K, V> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MultiMap");
    }

    fn validate_invariants(&self) -> Result<(), MeshHashError> {
        match self.table.iter().find(|(_, vs)| vs.is_empty()) {
            Some((k, _)) => Err(MeshHashError::InvariantViolation(format!(
                "key {k:?} kept with no value"
            ))),
            None => Ok(()),
        }
    }
}
