#[allow(clippy::disallowed_types)]
pub type Hasher = ahash::AHasher;
pub type BuildHasher = std::hash::BuildHasherDefault<Hasher>;

// Deterministic hashing, map iteration order is insertion order anyway
pub type OrderMap<K, V> = ordermap::OrderMap<K, V, BuildHasher>;

#[allow(clippy::disallowed_types)]
pub type HashSet<V> = std::collections::HashSet<V, BuildHasher>;

/// Groups items under the key produced by `key`, keeping groups in the order
/// their key was first produced and items in their original order.
pub fn group_in_order<K, T>(
    items: impl IntoIterator<Item = T>,
    mut key: impl FnMut(&T) -> K,
) -> OrderMap<K, Vec<T>>
where
    K: std::hash::Hash + Eq,
{
    let mut groups = OrderMap::<K, Vec<T>>::default();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}
