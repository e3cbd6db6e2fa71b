use crate::error::EnumerableError;
use crate::value::Value;
use std::any::type_name;
use std::fmt::{Debug, Display, Formatter, Write};
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

/// Binary operator folded over a collection by
/// [`Enumerable::reduce`](crate::Enumerable::reduce).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum ReduceOperation {
    Concatenate,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ReduceOperation {
    pub fn symbol(self) -> &'static str {
        match self {
            ReduceOperation::Concatenate => ".",
            ReduceOperation::Add => "+",
            ReduceOperation::Subtract => "-",
            ReduceOperation::Multiply => "*",
            ReduceOperation::Divide => "/",
        }
    }

    /// Whether the first element seeds the accumulator when no initial value
    /// is given. Operators without a two-sided identity work this way.
    pub fn seeds_from_first(self) -> bool {
        matches!(self, ReduceOperation::Subtract | ReduceOperation::Divide)
    }
}

impl Display for ReduceOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ReduceOperation {
    type Err = EnumerableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| EnumerableError::UnknownReduceOperation(s.to_string()))
    }
}

/// Element types that can be folded with a [`ReduceOperation`].
///
/// Identities are optional: a type without an additive identity can still be
/// reduced with `+` when an initial value is supplied.
pub trait Reducible: Clone + Debug {
    fn additive_identity() -> Option<Self>;
    fn multiplicative_identity() -> Option<Self>;
    fn empty_text() -> Option<Self>;
    fn is_text(&self) -> bool;
    fn is_zero(&self) -> bool;
    /// Appends the text form of `rhs`
    fn try_concat(self, rhs: &Self) -> Result<Self, EnumerableError>;
    fn try_arithmetic(
        self,
        operation: ReduceOperation,
        rhs: &Self,
    ) -> Result<Self, EnumerableError>;
}

#[duplicate::duplicate_item(
    int;
    [ i8 ]; [ i16 ]; [ i32 ]; [ i64 ]; [ i128 ]; [ isize ];
    [ u8 ]; [ u16 ]; [ u32 ]; [ u64 ]; [ u128 ]; [ usize ];
)]
impl Reducible for int {
    fn additive_identity() -> Option<Self> {
        Some(0)
    }

    fn multiplicative_identity() -> Option<Self> {
        Some(1)
    }

    fn empty_text() -> Option<Self> {
        None
    }

    fn is_text(&self) -> bool {
        false
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn try_concat(self, _rhs: &Self) -> Result<Self, EnumerableError> {
        Err(EnumerableError::NotText {
            type_name: type_name::<Self>(),
        })
    }

    fn try_arithmetic(
        self,
        operation: ReduceOperation,
        rhs: &Self,
    ) -> Result<Self, EnumerableError> {
        let result = match operation {
            ReduceOperation::Concatenate => return self.try_concat(rhs),
            ReduceOperation::Add => self.checked_add(*rhs),
            ReduceOperation::Subtract => self.checked_sub(*rhs),
            ReduceOperation::Multiply => self.checked_mul(*rhs),
            ReduceOperation::Divide => self.checked_div(*rhs),
        };
        result.ok_or(EnumerableError::Overflow(operation))
    }
}

#[duplicate::duplicate_item(
    float;
    [ f32 ];
    [ f64 ];
)]
impl Reducible for float {
    fn additive_identity() -> Option<Self> {
        Some(0.0)
    }

    fn multiplicative_identity() -> Option<Self> {
        Some(1.0)
    }

    fn empty_text() -> Option<Self> {
        None
    }

    fn is_text(&self) -> bool {
        false
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn try_concat(self, _rhs: &Self) -> Result<Self, EnumerableError> {
        Err(EnumerableError::NotText {
            type_name: type_name::<Self>(),
        })
    }

    fn try_arithmetic(
        self,
        operation: ReduceOperation,
        rhs: &Self,
    ) -> Result<Self, EnumerableError> {
        Ok(match operation {
            ReduceOperation::Concatenate => return self.try_concat(rhs),
            ReduceOperation::Add => self + rhs,
            ReduceOperation::Subtract => self - rhs,
            ReduceOperation::Multiply => self * rhs,
            ReduceOperation::Divide => self / rhs,
        })
    }
}

impl Reducible for String {
    fn additive_identity() -> Option<Self> {
        None
    }

    fn multiplicative_identity() -> Option<Self> {
        None
    }

    fn empty_text() -> Option<Self> {
        Some(String::new())
    }

    fn is_text(&self) -> bool {
        true
    }

    fn is_zero(&self) -> bool {
        false
    }

    fn try_concat(mut self, rhs: &Self) -> Result<Self, EnumerableError> {
        self.push_str(rhs);
        Ok(self)
    }

    fn try_arithmetic(
        self,
        operation: ReduceOperation,
        rhs: &Self,
    ) -> Result<Self, EnumerableError> {
        match operation {
            ReduceOperation::Concatenate => self.try_concat(rhs),
            _ => Err(EnumerableError::NotNumeric {
                operation,
                value: format!("{self:?}"),
            }),
        }
    }
}

/// Integer arithmetic stays integral while it is exact and falls back to
/// floats on overflow or inexact division.
impl Reducible for Value {
    fn additive_identity() -> Option<Self> {
        Some(Value::Integer(0))
    }

    fn multiplicative_identity() -> Option<Self> {
        Some(Value::Integer(1))
    }

    fn empty_text() -> Option<Self> {
        Some(Value::String(String::new()))
    }

    fn is_text(&self) -> bool {
        self.is_string()
    }

    fn is_zero(&self) -> bool {
        match self {
            Value::Integer(value) => *value == 0,
            Value::Float(value) => value.0 == 0.0,
            _ => false,
        }
    }

    fn try_concat(self, rhs: &Self) -> Result<Self, EnumerableError> {
        match self {
            Value::String(mut memo) => {
                // Writing into a String can't fail
                let _ = write!(memo, "{rhs}");
                Ok(Value::String(memo))
            }
            other => Err(EnumerableError::NonTextInitial(format!("{other:?}"))),
        }
    }

    fn try_arithmetic(
        self,
        operation: ReduceOperation,
        rhs: &Self,
    ) -> Result<Self, EnumerableError> {
        if operation == ReduceOperation::Concatenate {
            return self.try_concat(rhs);
        }

        if let (Value::Integer(a), Value::Integer(b)) = (&self, rhs) {
            return Ok(integer_arithmetic(operation, *a, *b));
        }

        let numeric = |value: &Value| {
            value.as_f64().ok_or_else(|| EnumerableError::NotNumeric {
                operation,
                value: format!("{value:?}"),
            })
        };
        let (a, b) = (numeric(&self)?, numeric(rhs)?);
        Ok(Value::from(float_arithmetic(operation, a, b)))
    }
}

fn integer_arithmetic(operation: ReduceOperation, a: i64, b: i64) -> Value {
    let exact = match operation {
        ReduceOperation::Add => a.checked_add(b),
        ReduceOperation::Subtract => a.checked_sub(b),
        ReduceOperation::Multiply => a.checked_mul(b),
        ReduceOperation::Divide if a.checked_rem(b) == Some(0) => a.checked_div(b),
        ReduceOperation::Divide | ReduceOperation::Concatenate => None,
    };

    exact.map_or_else(
        || Value::from(float_arithmetic(operation, a as f64, b as f64)),
        Value::Integer,
    )
}

fn float_arithmetic(operation: ReduceOperation, a: f64, b: f64) -> f64 {
    match operation {
        ReduceOperation::Add => a + b,
        ReduceOperation::Subtract => a - b,
        ReduceOperation::Multiply => a * b,
        ReduceOperation::Divide => a / b,
        ReduceOperation::Concatenate => f64::NAN,
    }
}
