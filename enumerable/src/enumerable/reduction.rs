use crate::error::EnumerableError;
use crate::reduce::{ReduceOperation, Reducible};
use crate::Enumerable;
use std::any::type_name;
use tracing::{debug, trace};

impl<V: Reducible> Enumerable<V> {
    /// Folds the collection left to right with `operation`.
    ///
    /// Without an `initial` value, `-` and `/` take the first element as the
    /// accumulator, and only the remaining elements are checked for zero
    /// divisors. All checks run before the fold starts.
    pub fn reduce(
        &self,
        operation: ReduceOperation,
        initial: Option<V>,
    ) -> Result<V, EnumerableError> {
        trace!(%operation, len = self.len(), has_initial = initial.is_some(), "reducing");

        if operation == ReduceOperation::Divide {
            let skip = usize::from(initial.is_none());
            if self.values().skip(skip).any(Reducible::is_zero) {
                debug!(len = self.len(), "division reduce over a zero divisor");
                return Err(EnumerableError::DivisionByZero);
            }
        }

        let mut values = self.values();
        let memo = match initial {
            Some(initial) if operation == ReduceOperation::Concatenate && !initial.is_text() => {
                return Err(EnumerableError::NonTextInitial(format!("{initial:?}")));
            }
            Some(initial) => initial,
            None if operation.seeds_from_first() => values
                .next()
                .cloned()
                .ok_or(EnumerableError::EmptyReduction(operation))?,
            None => identity_seed::<V>(operation)?,
        };

        values.try_fold(memo, |memo, value| match operation {
            ReduceOperation::Concatenate => memo.try_concat(value),
            _ => memo.try_arithmetic(operation, value),
        })
    }

    /// Parses the operator symbol, then reduces with it
    pub fn reduce_symbol(&self, symbol: &str, initial: Option<V>) -> Result<V, EnumerableError> {
        let operation = symbol.parse::<ReduceOperation>().inspect_err(|_| {
            debug!(symbol, "unknown reduce operation");
        })?;
        self.reduce(operation, initial)
    }
}

/// Accumulator an operation starts from when nothing seeds it
fn identity_seed<V: Reducible>(operation: ReduceOperation) -> Result<V, EnumerableError> {
    let not_numeric = || EnumerableError::NotNumeric {
        operation,
        value: type_name::<V>().to_string(),
    };
    match operation {
        ReduceOperation::Concatenate => V::empty_text().ok_or(EnumerableError::NotText {
            type_name: type_name::<V>(),
        }),
        ReduceOperation::Add => V::additive_identity().ok_or_else(not_numeric),
        ReduceOperation::Multiply => V::multiplicative_identity().ok_or_else(not_numeric),
        ReduceOperation::Subtract | ReduceOperation::Divide => {
            Err(EnumerableError::EmptyReduction(operation))
        }
    }
}
