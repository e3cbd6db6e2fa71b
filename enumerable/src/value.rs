use crate::compare::Comparable;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use strum::{EnumDiscriminants, EnumIs};

pub mod object;

pub use object::{EObject, ObjectRef};

pub type Number = OrderedFloat<f64>;

/// Dynamically typed element for heterogeneous collections.
///
/// Equality is strict identity: the variant has to match as well as the
/// payload, so `Integer(1)`, `Float(1.0)` and `String("1")` are three
/// different values.
#[derive(Debug, Clone, Eq, PartialEq, Hash, EnumDiscriminants, EnumIs)]
#[strum_discriminants(name(ValueKind), derive(Hash, Ord, PartialOrd), vis(pub))]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(Number),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Object(ObjectRef),
}

impl Value {
    pub fn object(object: impl EObject) -> Self {
        Value::Object(ObjectRef::new(object))
    }

    pub fn kind(&self) -> ValueKind {
        ValueKind::from(self)
    }

    /// Numeric view of integers and floats, `None` for everything else
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(value) => Some(*value as f64),
            Value::Float(value) => Some(value.0),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Looks up a field of a map value
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Map(fields) => fields.get(name),
            _ => None,
        }
    }
}

impl Comparable for Value {
    /// Objects that can compare themselves take priority. Everything else
    /// uses natural ordering: numbers numerically, strings lexicographically,
    /// containers by length and then element-wise, and values of unrelated
    /// kinds by kind (`Null < Boolean < numbers < String < List < Map <
    /// Object`).
    fn compare_to(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => a
                .get()
                .compare_object(b.get())
                .unwrap_or_else(|| a.get().type_name().cmp(b.get().type_name())),
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Integer(a), Value::Float(b)) => compare_int_float(*a, b.0),
            (Value::Float(a), Value::Integer(b)) => compare_int_float(*b, a.0).reverse(),
            (Value::Float(a), Value::Float(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.iter()
                    .zip(b)
                    .map(|(a, b)| a.compare_to(b))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            (Value::Map(a), Value::Map(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.iter()
                    .zip(b)
                    .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| va.compare_to(vb)))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

/// Exact comparison of an integer with a float, without rounding the
/// integer. NaN orders above every integer, as in [`OrderedFloat`].
fn compare_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, the first float past `i64::MAX`
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() || float >= LIMIT {
        return Ordering::Less;
    }
    if float < -LIMIT {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    int.cmp(&(whole as i64)).then_with(|| {
        if float > whole {
            Ordering::Less
        } else if float < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

#[duplicate::duplicate_item(
    ty;
    [ i8 ];
    [ i16 ];
    [ i32 ];
    [ i64 ];
    [ u8 ];
    [ u16 ];
    [ u32 ];
)]
impl From<ty> for Value {
    fn from(value: ty) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(OrderedFloat(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(OrderedFloat(value as f64))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Map(fields)
    }
}

impl From<ObjectRef> for Value {
    fn from(object: ObjectRef) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Text form of the value, as used by concatenation
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::String(value) => write!(f, "{value}"),
            Value::List(values) => write!(f, "[{}]", values.iter().join(", ")),
            Value::Map(fields) => write!(
                f,
                "{{{}}}",
                fields
                    .iter()
                    .map(|(name, value)| format!("{name}: {value}"))
                    .join(", ")
            ),
            Value::Object(object) => write!(f, "{object}"),
        }
    }
}

/// Builds a [`Value::Map`] from `name: value` pairs
#[macro_export]
macro_rules! vmap {
    ($($name:literal : $value:expr),* $(,)?) => {
        {
            let mut fields = std::collections::BTreeMap::<String, $crate::value::Value>::new();
            $(
                fields.insert($name.to_string(), $crate::value::Value::from($value));
            )*
            $crate::value::Value::Map(fields)
        }
    };
}
