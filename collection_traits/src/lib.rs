#![forbid(clippy::unconditional_recursion)]

#[cfg(feature = "ordermap")]
pub mod order_map;

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

pub trait Iterable {
    type Item<'a> where Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>>;
}

/// Ordered key-value storage that can be copied out as a plain listing and
/// rebuilt from one.
///
/// Rebuilding always produces a fresh container; the listing order is the
/// iteration order of the result.
pub trait Listing: HasLength + Sized {
    type Key;
    type Value;

    fn to_listing(&self) -> Vec<(Self::Key, Self::Value)>
    where
        Self::Key: Clone,
        Self::Value: Clone;

    fn from_listing(listing: impl IntoIterator<Item = (Self::Key, Self::Value)>) -> Self;
}
