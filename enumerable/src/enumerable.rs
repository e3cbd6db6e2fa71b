use crate::key::Key;
use collection_traits::{HasLength, Iterable, Listing};
use utils::map::OrderMap;

mod grouping;
mod ordering;
mod predicates;
mod reduction;
mod slicing;
mod traversal;

/// Ordered, key-addressable collection of values.
///
/// Every operation takes `&self`; operations that produce a collection build
/// a new one and never touch the receiver. Iteration order is insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerable<V> {
    entries: OrderMap<Key, V>,
}

impl<V> Enumerable<V> {
    pub fn new() -> Self {
        Self {
            entries: OrderMap::default(),
        }
    }

    /// Builds a collection keyed by sequential indices starting at 0
    pub fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        Self::rebuild(
            values
                .into_iter()
                .enumerate()
                .map(|(idx, value)| (Key::from(idx), value)),
        )
    }

    /// Builds a collection that keeps the given keys.
    ///
    /// A repeated key keeps its first position and its last value.
    pub fn from_pairs<K: Into<Key>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::rebuild(pairs.into_iter().map(|(key, value)| (key.into(), value)))
    }

    pub(crate) fn rebuild(listing: impl IntoIterator<Item = (Key, V)>) -> Self {
        Self {
            entries: OrderMap::from_listing(listing),
        }
    }

    /// Rebuilds from borrowed entries, keeping their keys
    pub(crate) fn rebuild_cloned<'a>(entries: impl IntoIterator<Item = (&'a Key, &'a V)>) -> Self
    where
        V: Clone + 'a,
    {
        Self::rebuild(
            entries
                .into_iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Key) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> ordermap::map::Iter<'_, Key, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> ordermap::map::Keys<'_, Key, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> ordermap::map::Values<'_, Key, V> {
        self.entries.values()
    }

    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    /// Copies the collection out as a key-value listing
    pub fn to_pairs(&self) -> Vec<(Key, V)>
    where
        V: Clone,
    {
        self.entries.to_listing()
    }

    pub fn into_values(self) -> Vec<V> {
        self.entries.into_values().collect()
    }
}

impl<V> Default for Enumerable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<V> for Enumerable<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::from_values(iter)
    }
}

impl<V> From<Vec<V>> for Enumerable<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

impl<V, const N: usize> From<[V; N]> for Enumerable<V> {
    fn from(values: [V; N]) -> Self {
        Self::from_values(values)
    }
}

impl<V> IntoIterator for Enumerable<V> {
    type Item = (Key, V);
    type IntoIter = ordermap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Enumerable<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = ordermap::map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<V> HasLength for Enumerable<V> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<V> Iterable for Enumerable<V> {
    type Item<'a> = (&'a Key, &'a V) where Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        self.entries.iter()
    }
}
