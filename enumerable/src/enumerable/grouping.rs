use crate::Enumerable;
use std::hash::Hash;
use utils::iter_utils::UtilsRunsIterExt;
use utils::map::{group_in_order, OrderMap};

impl<V: Clone> Enumerable<V> {
    /// Groups elements by `f`, merging every element with the same key
    /// regardless of position. Groups come in the order their key was first
    /// seen.
    pub fn group_by<K: Hash + Eq>(&self, mut f: impl FnMut(&V) -> K) -> OrderMap<K, Vec<V>> {
        group_in_order(self.values().cloned(), |value| f(value))
    }

    /// Splits the collection into runs of consecutive elements with the
    /// same key. A key seen again after a different one starts a new run.
    pub fn chunk<K: PartialEq>(&self, mut f: impl FnMut(&V) -> K) -> Vec<(K, Vec<V>)> {
        self.values().cloned().runs_by(|value| f(value))
    }
}
