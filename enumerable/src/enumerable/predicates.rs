use crate::identifier::Identifier;
use crate::truthy::Truthy;
use crate::Enumerable;

impl<V> Enumerable<V> {
    /// `false` as soon as `f` fails for an element, `true` for an empty
    /// collection
    pub fn all_true(&self, mut f: impl FnMut(&V) -> bool) -> bool {
        self.values().all(|value| f(value))
    }

    pub fn all_truthy(&self) -> bool
    where
        V: Truthy,
    {
        self.values().all(Truthy::is_truthy)
    }

    /// `true` as soon as `f` holds for an element, `false` for an empty
    /// collection
    pub fn any_true(&self, mut f: impl FnMut(&V) -> bool) -> bool {
        self.values().any(|value| f(value))
    }

    pub fn any_truthy(&self) -> bool
    where
        V: Truthy,
    {
        self.values().any(Truthy::is_truthy)
    }

    /// Elements matching `f`, with their keys
    pub fn find_all(&self, mut f: impl FnMut(&V) -> bool) -> Self
    where
        V: Clone,
    {
        Self::rebuild_cloned(self.iter().filter(|(_, value)| f(value)))
    }

    /// Alias of [`Enumerable::find_all`]
    pub fn select(&self, f: impl FnMut(&V) -> bool) -> Self
    where
        V: Clone,
    {
        self.find_all(f)
    }

    /// Elements not matching `f`, with their keys
    pub fn reject(&self, mut f: impl FnMut(&V) -> bool) -> Self
    where
        V: Clone,
    {
        Self::rebuild_cloned(self.iter().filter(|(_, value)| !f(value)))
    }

    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn count_where(&self, mut f: impl FnMut(&V) -> bool) -> usize {
        self.values().filter(|value| f(value)).count()
    }

    /// Number of elements identical to `item`
    pub fn count_item(&self, item: &V) -> usize
    where
        V: PartialEq,
    {
        self.count_where(|value| value == item)
    }

    pub fn does_include(&self, item: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|value| value == item)
    }

    /// Whether exactly one element matches. Stops at the second match.
    pub fn has_exactly_one<'a>(&self, identifier: impl Into<Identifier<'a, V>>) -> bool
    where
        V: PartialEq + Truthy + 'a,
    {
        let probe = identifier.into().into_probe();
        let mut hits = self.values().filter(|value| probe(value));
        hits.next().is_some() && hits.next().is_none()
    }

    pub fn has_none<'a>(&self, identifier: impl Into<Identifier<'a, V>>) -> bool
    where
        V: PartialEq + Truthy + 'a,
    {
        let probe = identifier.into().into_probe();
        !self.values().any(|value| probe(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::identifier::Identifier;
    use crate::key::Key;
    use crate::value::Value;
    use crate::{enumerable, Enumerable};
    use rstest::rstest;

    #[rstest]
    #[case(vec![10, 11, 3], true)]
    #[case(vec![10, -1, 3], false)]
    #[case(vec![], true)]
    fn all_positive(#[case] items: Vec<i32>, #[case] expected: bool) {
        assert_eq!(Enumerable::from(items).all_true(|n| *n > 0), expected);
    }

    #[rstest]
    #[case(vec![-6, -1, -3], false)]
    #[case(vec![-4, 5, -3], true)]
    #[case(vec![], false)]
    fn any_positive(#[case] items: Vec<i32>, #[case] expected: bool) {
        assert_eq!(Enumerable::from(items).any_true(|n| *n > 0), expected);
    }

    #[test]
    fn all_true_short_circuits() {
        let items = Enumerable::from_values([1, 0, 2, 3]);
        let mut visited = 0;
        assert!(!items.all_true(|n| {
            visited += 1;
            *n != 0
        }));
        assert_eq!(visited, 2);
    }

    #[test]
    fn truthiness_without_predicate() {
        let items: Enumerable<Value> = enumerable![1, "a", true];
        assert!(items.all_truthy());

        let items: Enumerable<Value> = enumerable![1, Value::Null, true];
        assert!(!items.all_truthy());
        assert!(items.any_truthy());

        let items: Enumerable<Value> = enumerable![0, "", false, Value::Null];
        assert!(!items.any_truthy());
        assert!(Enumerable::<Value>::new().all_truthy());
        assert!(!Enumerable::<Value>::new().any_truthy());
    }

    #[test]
    fn find_all_keeps_keys() {
        let items = Enumerable::from_values([-10, 5, 6, 19, 132, -3, 3]);
        let big = items.find_all(|n| *n > 5);
        assert_eq!(big.to_vec(), vec![6, 19, 132]);
        assert_eq!(
            big.keys().cloned().collect::<Vec<_>>(),
            vec![Key::from(2i64), Key::from(3i64), Key::from(4i64)]
        );
        assert_eq!(items.select(|n| *n > 5), big);
    }

    #[test]
    fn reject_is_the_complement() {
        let items = Enumerable::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(
            items.reject(|n| n % 2 == 1),
            Enumerable::from_pairs([("b", 2)])
        );
    }

    #[test]
    fn counting() {
        let items = Enumerable::from_values([10, 14, 6, -3, 0, -91213]);
        assert_eq!(items.count(), 6);
        assert_eq!(items.count_where(|n| *n >= 0), 4);

        let items = Enumerable::from_values([0, 1, 2, 1, 1, 1, 3, 0, 1]);
        assert_eq!(items.count_item(&1), 5);
    }

    #[test]
    fn count_item_checks_identity() {
        let items: Enumerable<Value> = enumerable![1, "1", "1", 1, 1];
        assert_eq!(items.count_item(&Value::from(1)), 3);
        assert_eq!(items.count_item(&Value::from("1")), 2);
    }

    #[rstest]
    #[case(5, true)]
    #[case(10, false)]
    fn does_include_numbers(#[case] needle: i32, #[case] expected: bool) {
        let items: Enumerable<Value> = enumerable![0, 5, 6];
        assert_eq!(items.does_include(&Value::from(needle)), expected);
    }

    #[test]
    fn does_include_checks_identity() {
        let items: Enumerable<Value> = enumerable![0, "5", 6];
        assert!(!items.does_include(&Value::from(5)));
        assert!(items.does_include(&Value::from("5")));
    }

    #[rstest]
    #[case(vec![10, 12, -8, 12], false)]
    #[case(vec![10, 12, 14, -8], true)]
    #[case(vec![10, 14, -8], false)]
    fn exactly_one_literal(#[case] items: Vec<i32>, #[case] expected: bool) {
        let items: Enumerable<Value> = items.into_iter().map(Value::from).collect();
        assert_eq!(items.has_exactly_one(Value::from(12)), expected);
    }

    #[rstest]
    #[case(vec![false, true, false], true)]
    #[case(vec![false, true, true], false)]
    #[case(vec![false, false], false)]
    fn exactly_one_truthy(#[case] items: Vec<bool>, #[case] expected: bool) {
        assert_eq!(
            Enumerable::from(items).has_exactly_one(Identifier::Truthy),
            expected
        );
    }

    #[test]
    fn exactly_one_predicate() {
        let items = Enumerable::from_values([3, 8, 11]);
        assert!(items.has_exactly_one(Identifier::predicate(|n: &i32| *n > 10)));
        assert!(!items.has_exactly_one(Identifier::predicate(|n: &i32| *n > 5)));
    }

    #[test]
    fn exactly_one_stops_after_second_hit() {
        let items = Enumerable::from_values([1, 1, 1, 1]);
        let calls = std::cell::Cell::new(0);
        let found = items.has_exactly_one(Identifier::predicate(|_: &i32| {
            calls.set(calls.get() + 1);
            true
        }));
        assert!(!found);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn has_none_addressing() {
        let items: Enumerable<Value> = enumerable![1, "2", 3];
        assert!(items.has_none(Value::from(2)));
        assert!(!items.has_none(Value::from("2")));
        assert!(!items.has_none(Identifier::predicate(|v: &Value| v.is_string())));
        assert!(!items.has_none(Identifier::Truthy));

        let falsy: Enumerable<Value> = enumerable![0, false, ""];
        assert!(falsy.has_none(Identifier::Truthy));
        assert!(Enumerable::<Value>::new().has_none(Value::Null));
    }
}
