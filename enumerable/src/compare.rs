//! Three-way comparison shared by every ordering-sensitive operation.
//!
//! A comparator is any `Fn(&V, &V) -> Ordering`. Operations that don't take
//! an explicit comparator fall back to the element's [`Comparable`]
//! implementation.

use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Capability of a value to order itself against another value of the same
/// type.
pub trait Comparable {
    fn compare_to(&self, other: &Self) -> Ordering;
}

#[duplicate::duplicate_item(
    ty;
    [ i8 ]; [ i16 ]; [ i32 ]; [ i64 ]; [ i128 ]; [ isize ];
    [ u8 ]; [ u16 ]; [ u32 ]; [ u64 ]; [ u128 ]; [ usize ];
    [ bool ]; [ char ]; [ str ]; [ String ];
    [ OrderedFloat<f32> ]; [ OrderedFloat<f64> ];
)]
impl Comparable for ty {
    fn compare_to(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

#[duplicate::duplicate_item(
    ty;
    [ f32 ];
    [ f64 ];
)]
impl Comparable for ty {
    fn compare_to(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn compare_to(&self, other: &Self) -> Ordering {
        T::compare_to(*self, *other)
    }
}

/// `None` orders before any `Some`
impl<T: Comparable> Comparable for Option<T> {
    fn compare_to(&self, other: &Self) -> Ordering {
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.compare_to(b),
        }
    }
}

/// Default comparator
pub fn natural_order<V: Comparable + ?Sized>(a: &V, b: &V) -> Ordering {
    a.compare_to(b)
}

/// Converts an ordering into its `-1`, `0`, `1` form
pub fn three_way(ordering: Ordering) -> i8 {
    ordering as i8
}

/// Adapts a comparator returning a signed integer, only the sign matters
pub fn from_three_way<V: ?Sized>(cmp: impl Fn(&V, &V) -> i32) -> impl Fn(&V, &V) -> Ordering {
    move |a, b| cmp(a, b).cmp(&0)
}

pub fn reversed<V: ?Sized>(cmp: impl Fn(&V, &V) -> Ordering) -> impl Fn(&V, &V) -> Ordering {
    move |a, b| cmp(b, a)
}

#[cfg(test)]
mod tests {
    use super::{from_three_way, natural_order, reversed, three_way, Comparable};
    use rstest::rstest;
    use std::cmp::Ordering;

    #[rstest]
    #[case(Ordering::Less, -1)]
    #[case(Ordering::Equal, 0)]
    #[case(Ordering::Greater, 1)]
    fn three_way_signs(#[case] ordering: Ordering, #[case] sign: i8) {
        assert_eq!(three_way(ordering), sign);
    }

    #[test]
    fn floats_use_total_order() {
        assert_eq!(1.5f64.compare_to(&-0.5), Ordering::Greater);
        assert_eq!(f64::NAN.compare_to(&f64::NAN), Ordering::Equal);
    }

    #[test]
    fn options_put_none_first() {
        assert_eq!(None::<i32>.compare_to(&Some(1)), Ordering::Less);
        assert_eq!(Some(2).compare_to(&Some(1)), Ordering::Greater);
    }

    #[test]
    fn adapters() {
        let by_len = from_three_way(|a: &str, b: &str| a.len() as i32 - b.len() as i32);
        assert_eq!(by_len("abc", "x"), Ordering::Greater);
        assert_eq!(by_len("ab", "xy"), Ordering::Equal);

        let desc = reversed(natural_order::<str>);
        assert_eq!(desc("a", "b"), Ordering::Greater);
    }
}
