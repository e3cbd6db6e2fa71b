use crate::truthy::Truthy;
use std::fmt::{Debug, Formatter};

/// Addresses elements either by a literal value or by a predicate.
///
/// Literals match under strict identity (`PartialEq`). The default,
/// [`Identifier::Truthy`], matches every truthy element.
pub enum Identifier<'a, V> {
    Truthy,
    Literal(V),
    Predicate(Box<dyn Fn(&V) -> bool + 'a>),
}

impl<'a, V> Identifier<'a, V> {
    pub fn predicate(predicate: impl Fn(&V) -> bool + 'a) -> Self {
        Identifier::Predicate(Box::new(predicate))
    }
}

impl<'a, V: PartialEq + Truthy + 'a> Identifier<'a, V> {
    /// Resolves the identifier once into the test applied to each element
    pub(crate) fn into_probe(self) -> Box<dyn Fn(&V) -> bool + 'a> {
        match self {
            Identifier::Truthy => Box::new(|value: &V| value.is_truthy()),
            Identifier::Literal(literal) => Box::new(move |value: &V| *value == literal),
            Identifier::Predicate(predicate) => predicate,
        }
    }
}

impl<V> Default for Identifier<'_, V> {
    fn default() -> Self {
        Identifier::Truthy
    }
}

impl<'a, V> From<V> for Identifier<'a, V> {
    fn from(value: V) -> Self {
        Identifier::Literal(value)
    }
}

impl<V: Debug> Debug for Identifier<'_, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Truthy => write!(f, "Truthy"),
            Identifier::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Identifier::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}
