use crate::value::Value;

/// Whether a value counts as "true" when no predicate is supplied.
///
/// `false`, numeric zero, empty text and absence are falsy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

#[duplicate::duplicate_item(
    ty;
    [ i8 ]; [ i16 ]; [ i32 ]; [ i64 ]; [ i128 ]; [ isize ];
    [ u8 ]; [ u16 ]; [ u32 ]; [ u64 ]; [ u128 ]; [ usize ];
)]
impl Truthy for ty {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

#[duplicate::duplicate_item(
    ty;
    [ f32 ];
    [ f64 ];
)]
impl Truthy for ty {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        T::is_truthy(*self)
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// Text `"0"` is falsy alongside the empty string
impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(value) => *value,
            Value::Integer(value) => *value != 0,
            Value::Float(value) => value.0 != 0.0,
            Value::String(value) => !value.is_empty() && value != "0",
            Value::List(values) => !values.is_empty(),
            Value::Map(fields) => !fields.is_empty(),
            Value::Object(_) => true,
        }
    }
}
