use crate::compare::Comparable;
use downcast_rs::{impl_downcast, Downcast};
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Host object stored inside a [`Value`](crate::value::Value).
///
/// Objects have reference identity: two [`ObjectRef`]s are equal only when
/// they point to the same instance.
pub trait EObject: Debug + Display + Send + Sync + Downcast {
    fn type_name(&self) -> &str;

    /// Three-way comparison against another object.
    ///
    /// Returns `None` when this object can't be ordered against `other`,
    /// in which case natural ordering is used instead.
    fn compare_object(&self, _other: &dyn EObject) -> Option<Ordering> {
        None
    }
}

impl_downcast!(EObject);

/// Compares `this` with `other` through [`Comparable`] if `other` has the
/// same concrete type.
///
/// Meant as the body of [`EObject::compare_object`] for comparable objects.
pub fn compare_same_type<T: EObject + Comparable>(
    this: &T,
    other: &dyn EObject,
) -> Option<Ordering> {
    other
        .downcast_ref::<T>()
        .map(|other| Comparable::compare_to(this, other))
}

#[derive(Debug, Clone)]
pub struct ObjectRef(Arc<dyn EObject>);

impl ObjectRef {
    pub fn new(object: impl EObject) -> Self {
        Self(Arc::new(object))
    }

    pub fn get(&self) -> &dyn EObject {
        &*self.0
    }

    pub fn downcast_ref<T: EObject>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for ObjectRef {}

impl Hash for ObjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl Display for ObjectRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::{compare_same_type, EObject, ObjectRef};
    use crate::compare::Comparable;
    use std::cmp::Ordering;
    use std::fmt::{Display, Formatter};

    #[derive(Debug)]
    struct Weight(u32);

    impl Display for Weight {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}kg", self.0)
        }
    }

    impl Comparable for Weight {
        fn compare_to(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    impl EObject for Weight {
        fn type_name(&self) -> &str {
            "Weight"
        }

        fn compare_object(&self, other: &dyn EObject) -> Option<Ordering> {
            compare_same_type(self, other)
        }
    }

    #[derive(Debug)]
    struct Opaque;

    impl Display for Opaque {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "opaque")
        }
    }

    impl EObject for Opaque {
        fn type_name(&self) -> &str {
            "Opaque"
        }
    }

    #[test]
    fn identity_is_by_instance() {
        let a = ObjectRef::new(Weight(1));
        let b = ObjectRef::new(Weight(1));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn comparison_needs_same_type() {
        let light = ObjectRef::new(Weight(1));
        let heavy = ObjectRef::new(Weight(7));
        let opaque = ObjectRef::new(Opaque);

        assert_eq!(
            light.get().compare_object(heavy.get()),
            Some(Ordering::Less)
        );
        assert_eq!(light.get().compare_object(opaque.get()), None);
        assert_eq!(opaque.get().compare_object(light.get()), None);
        assert_eq!(heavy.downcast_ref::<Weight>().map(|w| w.0), Some(7));
        assert_eq!(heavy.to_string(), "7kg");
    }
}
