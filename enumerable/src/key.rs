use derive_more::{Display, From};

/// Position of an element inside an [`Enumerable`](crate::Enumerable).
///
/// Collections built from plain values are keyed by sequential indices,
/// collections built from pairs keep whatever keys they were given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub enum Key {
    #[display("{_0}")]
    Index(i64),
    #[display("{_0}")]
    Name(String),
}

impl Key {
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(idx) => Some(*idx),
            Key::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as i64)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Index(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Name(value.to_string())
    }
}
