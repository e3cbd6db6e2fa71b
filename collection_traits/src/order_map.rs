use crate::{HasLength, Iterable, Listing};
use std::hash::{BuildHasher, Hash};

#[allow(clippy::disallowed_types)]
impl<K, V, H> Iterable for ordermap::OrderMap<K, V, H> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        ordermap::OrderMap::iter(self)
    }
}

#[allow(clippy::disallowed_types)]
impl<K, V, H> HasLength for ordermap::OrderMap<K, V, H> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

/// Rebuilding from a listing with a repeated key keeps the first position
/// of that key and the last value written to it.
#[allow(clippy::disallowed_types)]
impl<K: Hash + Eq, V, H: BuildHasher + Default> Listing for ordermap::OrderMap<K, V, H> {
    type Key = K;
    type Value = V;

    fn to_listing(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn from_listing(listing: impl IntoIterator<Item = (K, V)>) -> Self {
        let listing = listing.into_iter();
        let mut map = Self::with_capacity_and_hasher(listing.size_hint().0, H::default());
        for (key, value) in listing {
            map.insert(key, value);
        }
        map
    }
}
