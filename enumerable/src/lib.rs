//! Ordered, key-addressable collections with a uniform set of higher-order
//! operations: traversal, filtering, reduction, grouping, ordering and
//! membership queries.

pub mod compare;
mod enumerable;
pub mod error;
pub mod identifier;
pub mod key;
pub mod reduce;
pub mod truthy;
pub mod value;


pub use enumerable::Enumerable;

pub mod prelude {
    pub use crate::compare::Comparable;
    pub use crate::enumerable::Enumerable;
    pub use crate::error::EnumerableError;
    pub use crate::identifier::Identifier;
    pub use crate::key::Key;
    pub use crate::reduce::{ReduceOperation, Reducible};
    pub use crate::truthy::Truthy;
    pub use crate::value::{EObject, ObjectRef, Value};
}

/// Builds an [`Enumerable`] from a list of values, converting each one with
/// [`Into`]
#[macro_export]
macro_rules! enumerable {
    ($($value:expr),* $(,)?) => {
        $crate::Enumerable::from_values([$(::core::convert::Into::into($value)),*])
    };
}
