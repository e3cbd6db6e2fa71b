use crate::compare::Comparable;
use crate::Enumerable;
use std::cmp::Ordering;

impl<V> Enumerable<V> {
    /// Largest element under `cmp`. Of several equal maxima the first one
    /// is returned.
    pub fn max_by(&self, cmp: impl Fn(&V, &V) -> Ordering) -> Option<&V> {
        self.values()
            .reduce(|best, value| match cmp(value, best) {
                Ordering::Greater => value,
                _ => best,
            })
    }

    /// Smallest element under `cmp`. Of several equal minima the first one
    /// is returned.
    pub fn min_by(&self, cmp: impl Fn(&V, &V) -> Ordering) -> Option<&V> {
        self.values()
            .reduce(|best, value| match cmp(value, best) {
                Ordering::Less => value,
                _ => best,
            })
    }

    /// `(min, max)` in a single pass, agreeing with [`Enumerable::min_by`]
    /// and [`Enumerable::max_by`]
    pub fn min_max_by(&self, cmp: impl Fn(&V, &V) -> Ordering) -> Option<(&V, &V)> {
        let mut values = self.values();
        let first = values.next()?;
        Some(values.fold((first, first), |(min, max), value| {
            let min = if cmp(value, min).is_lt() { value } else { min };
            let max = if cmp(value, max).is_gt() { value } else { max };
            (min, max)
        }))
    }

    /// Stable sort into a freshly indexed collection
    pub fn sort_by(&self, cmp: impl Fn(&V, &V) -> Ordering) -> Self
    where
        V: Clone,
    {
        let mut sorted: Vec<&V> = self.values().collect();
        sorted.sort_by(|a, b| cmp(a, b));
        Self::from_values(sorted.into_iter().cloned())
    }

    /// The `count` largest elements, largest first
    pub fn max_elements_by(&self, count: usize, cmp: impl Fn(&V, &V) -> Ordering) -> Self
    where
        V: Clone,
    {
        self.first_sorted(count, |a, b| cmp(b, a))
    }

    /// The `count` smallest elements, smallest first
    pub fn min_elements_by(&self, count: usize, cmp: impl Fn(&V, &V) -> Ordering) -> Self
    where
        V: Clone,
    {
        self.first_sorted(count, cmp)
    }

    fn first_sorted(&self, count: usize, cmp: impl Fn(&V, &V) -> Ordering) -> Self
    where
        V: Clone,
    {
        let mut sorted: Vec<&V> = self.values().collect();
        sorted.sort_by(|a, b| cmp(a, b));
        Self::from_values(sorted.into_iter().take(count).cloned())
    }
}

impl<V: Comparable> Enumerable<V> {
    pub fn max(&self) -> Option<&V> {
        self.max_by(V::compare_to)
    }

    pub fn min(&self) -> Option<&V> {
        self.min_by(V::compare_to)
    }

    pub fn min_max(&self) -> Option<(&V, &V)> {
        self.min_max_by(V::compare_to)
    }

    pub fn sort(&self) -> Self
    where
        V: Clone,
    {
        self.sort_by(V::compare_to)
    }

    pub fn max_elements(&self, count: usize) -> Self
    where
        V: Clone,
    {
        self.max_elements_by(count, V::compare_to)
    }

    pub fn min_elements(&self, count: usize) -> Self
    where
        V: Clone,
    {
        self.min_elements_by(count, V::compare_to)
    }
}
