use crate::error::EnumerableError;
use crate::identifier::Identifier;
use crate::key::Key;
use crate::truthy::Truthy;
use crate::Enumerable;
use itertools::Itertools;
use std::ops::ControlFlow;
use tracing::trace;

impl<V> Enumerable<V> {
    pub fn each(&self, f: impl FnMut(&V)) {
        self.values().for_each(f);
    }

    /// Calls `f` with the key and the value of every element
    pub fn each_with_index(&self, mut f: impl FnMut(&Key, &V)) {
        for (key, value) in self.iter() {
            f(key, value);
        }
    }

    pub fn reverse_each(&self, f: impl FnMut(&V)) {
        self.values().rev().for_each(f);
    }

    /// Walks the whole collection `times` times, or forever when `times` is
    /// `None`.
    ///
    /// The callback can stop the walk early by returning
    /// [`ControlFlow::Break`], whose payload is returned. An empty collection
    /// returns immediately, even without a bound.
    pub fn cycle<B>(
        &self,
        times: Option<usize>,
        mut f: impl FnMut(&V) -> ControlFlow<B>,
    ) -> Option<B> {
        if self.is_empty() {
            return None;
        }

        let mut pass = || match self.values().try_for_each(&mut f) {
            ControlFlow::Continue(()) => None,
            ControlFlow::Break(result) => Some(result),
        };

        match times {
            Some(times) => (0..times).find_map(|_| pass()),
            None => {
                trace!(len = self.len(), "cycling without a bound");
                loop {
                    if let Some(result) = pass() {
                        return Some(result);
                    }
                }
            }
        }
    }

    /// Passes consecutive slices of `size` elements to `f`; the last slice
    /// may be shorter.
    pub fn each_slice(
        &self,
        size: usize,
        mut f: impl FnMut(&[&V]),
    ) -> Result<(), EnumerableError> {
        if size == 0 {
            return Err(EnumerableError::InvalidSliceSize);
        }

        let values = self.values().collect_vec();
        values.chunks(size).for_each(|slice| f(slice));
        Ok(())
    }

    /// Maps every value, keeping the keys
    pub fn map<U>(&self, mut f: impl FnMut(&V) -> U) -> Enumerable<U> {
        Enumerable::rebuild(self.iter().map(|(key, value)| (key.clone(), f(value))))
    }

    /// Alias of [`Enumerable::map`]
    pub fn collect<U>(&self, f: impl FnMut(&V) -> U) -> Enumerable<U> {
        self.map(f)
    }

    /// Left fold with a callback, starting from `initial`
    pub fn reduce_with<A>(&self, initial: A, f: impl FnMut(A, &V) -> A) -> A {
        self.values().fold(initial, f)
    }

    pub fn find(&self, mut f: impl FnMut(&V) -> bool) -> Option<&V> {
        self.values().find(|value| f(value))
    }

    /// Like [`Enumerable::find`], but falls back to `on_none` when nothing
    /// matches
    pub fn find_or_else(&self, f: impl FnMut(&V) -> bool, on_none: impl FnOnce() -> V) -> V
    where
        V: Clone,
    {
        self.find(f).cloned().unwrap_or_else(on_none)
    }

    /// Key of the first element matched by `identifier`
    pub fn find_index<'a>(&self, identifier: impl Into<Identifier<'a, V>>) -> Option<&Key>
    where
        V: PartialEq + Truthy + 'a,
    {
        let probe = identifier.into().into_probe();
        self.iter()
            .find_map(|(key, value)| probe(value).then_some(key))
    }

    pub fn find_index_or_else<'a>(
        &self,
        identifier: impl Into<Identifier<'a, V>>,
        on_none: impl FnOnce() -> Key,
    ) -> Key
    where
        V: PartialEq + Truthy + 'a,
    {
        self.find_index(identifier).cloned().unwrap_or_else(on_none)
    }
}
