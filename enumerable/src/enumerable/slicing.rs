use crate::key::Key;
use crate::Enumerable;
use utils::map::HashSet;

impl<V: Clone> Enumerable<V> {
    /// Skips `count` elements from the front. A negative `count` keeps only
    /// the last `|count|` elements instead.
    ///
    /// Index keys of the result are renumbered from 0, named keys are kept.
    pub fn drop(&self, count: isize) -> Self {
        let start = if count >= 0 {
            count.unsigned_abs()
        } else {
            self.len().saturating_sub(count.unsigned_abs())
        };
        self.slice_from(start)
    }

    /// Drops the leading elements matching `f`. The first element that
    /// fails `f` is kept, keys are renumbered like in [`Enumerable::drop`].
    pub fn drop_while(&self, mut f: impl FnMut(&V) -> bool) -> Self {
        let start = self
            .values()
            .position(|value| !f(value))
            .unwrap_or(self.len());
        self.slice_from(start)
    }

    /// First `count` elements, with their keys
    pub fn take(&self, count: usize) -> Self {
        Self::rebuild_cloned(self.iter().take(count))
    }

    /// Leading elements matching `f`, with their keys
    pub fn take_while(&self, mut f: impl FnMut(&V) -> bool) -> Self {
        Self::rebuild_cloned(self.iter().take_while(|(_, value)| f(value)))
    }

    /// First `count` elements, freshly indexed
    pub fn first_n(&self, count: usize) -> Self {
        Self::from_values(self.values().take(count).cloned())
    }

    /// First occurrence of every distinct element, with its key
    pub fn unique(&self) -> Self
    where
        V: Eq + std::hash::Hash,
    {
        let mut seen = HashSet::<&V>::default();
        Self::rebuild_cloned(self.iter().filter(|(_, value)| seen.insert(*value)))
    }

    fn slice_from(&self, start: usize) -> Self {
        let mut next_index = 0;
        Self::rebuild(self.iter().skip(start).map(|(key, value)| {
            let key = match key {
                Key::Index(_) => {
                    next_index += 1;
                    Key::Index(next_index - 1)
                }
                Key::Name(name) => Key::Name(name.clone()),
            };
            (key, value.clone())
        }))
    }
}

impl<V> Enumerable<V> {
    pub fn first(&self) -> Option<&V> {
        self.values().next()
    }
}

#[cfg(test)]
mod tests {
    use crate::key::Key;
    use crate::value::Value;
    use crate::{enumerable, Enumerable};
    use rstest::rstest;

    #[rstest]
    #[case(2, vec![3, 4, 5])]
    #[case(0, vec![1, 2, 3, 4, 5])]
    #[case(100, vec![])]
    #[case(-2, vec![4, 5])]
    #[case(-100, vec![1, 2, 3, 4, 5])]
    fn drop_counts(#[case] count: isize, #[case] expected: Vec<i32>) {
        let items = Enumerable::from_values([1, 2, 3, 4, 5]);
        assert_eq!(items.drop(count), Enumerable::from_values(expected));
    }

    #[test]
    fn drop_renumbers_index_keys_only() {
        let items = Enumerable::from_pairs([
            (Key::from(7i64), 'a'),
            (Key::from("x"), 'b'),
            (Key::from(9i64), 'c'),
            (Key::from(3i64), 'd'),
        ]);
        assert_eq!(
            items.drop(1).to_pairs(),
            vec![
                (Key::from("x"), 'b'),
                (Key::from(0i64), 'c'),
                (Key::from(1i64), 'd'),
            ]
        );
    }

    #[test]
    fn drop_while_keeps_failing_element() {
        let items = Enumerable::from_values([1, 2, 3, 4, 5]);
        assert_eq!(
            items.drop_while(|n| *n < 4),
            Enumerable::from_values([4, 5])
        );
        assert!(items.drop_while(|_| true).is_empty());
        assert_eq!(items.drop_while(|_| false), items);
    }

    #[test]
    fn take_keeps_keys() {
        let items = Enumerable::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(items.take(2), Enumerable::from_pairs([("a", 1), ("b", 2)]));
        assert_eq!(items.take(10), items);
        assert!(items.take(0).is_empty());
    }

    #[test]
    fn take_while_stops_before_failure() {
        let items = Enumerable::from_values([1, 2, 3, 4, 5, 0]);
        let taken = items.take_while(|n| *n < 3);
        assert_eq!(taken.to_vec(), vec![1, 2]);
        assert!(items.take_while(|n| *n > 10).is_empty());
    }

    #[test]
    fn take_while_keeps_keys() {
        let items = Enumerable::from_pairs([("a", 1), ("b", 2), ("c", 5)]);
        assert_eq!(
            items.take_while(|n| *n < 3),
            Enumerable::from_pairs([("a", 1), ("b", 2)])
        );

        let items = Enumerable::from_pairs([(4i64, 1), (8i64, 2), (2i64, 5)]);
        assert_eq!(
            items.take_while(|n| *n < 3).to_pairs(),
            vec![(Key::from(4i64), 1), (Key::from(8i64), 2)]
        );
    }

    #[test]
    fn first_elements() {
        let items = Enumerable::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(items.first(), Some(&1));
        assert_eq!(items.first_n(2), Enumerable::from_values([1, 2]));
        assert_eq!(Enumerable::<i32>::new().first(), None);
    }

    #[test]
    fn unique_keeps_types_apart() {
        let items: Enumerable<Value> = enumerable![1, 2, 1, 2, "1", "2", "1"];
        let unique = items.unique();
        assert_eq!(
            unique.to_vec(),
            vec![
                Value::from(1),
                Value::from(2),
                Value::from("1"),
                Value::from("2"),
            ]
        );
        assert_eq!(
            unique.keys().cloned().collect::<Vec<_>>(),
            vec![
                Key::from(0i64),
                Key::from(1i64),
                Key::from(4i64),
                Key::from(5i64),
            ]
        );
    }
}
