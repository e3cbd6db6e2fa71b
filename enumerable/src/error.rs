use crate::reduce::ReduceOperation;
use miette::Diagnostic;
use thiserror::Error;

/// Usage errors raised by collection operations.
///
/// Nothing here is retryable: every variant points at a call that can never
/// succeed with the same arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EnumerableError {
    #[error("unknown reduce operation `{0}`")]
    #[diagnostic(help("expected one of `.`, `+`, `-`, `*`, `/`"))]
    UnknownReduceOperation(String),
    #[error("initial value for concatenation should be text, got {0}")]
    NonTextInitial(String),
    #[error("collection contains zero, can't reduce with division")]
    DivisionByZero,
    #[error("can't reduce an empty collection with `{0}` without an initial value")]
    EmptyReduction(ReduceOperation),
    #[error("can't apply `{operation}` to non-numeric value {value}")]
    NotNumeric {
        operation: ReduceOperation,
        value: String,
    },
    #[error("values of type `{type_name}` have no text form to concatenate")]
    NotText { type_name: &'static str },
    #[error("numeric overflow while reducing with `{0}`")]
    Overflow(ReduceOperation),
    #[error("slice size should be positive")]
    InvalidSliceSize,
}
