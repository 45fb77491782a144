//! Universal object contract.
//!
//! Every reference type hosted by the Mica runtime implements [`Object`].
//! The trait carries the capability set shared by all managed instances:
//! type identity, string rendering, hashing, and the finalization hook the
//! reclamation path invokes. Defaults are conservative and total; concrete
//! types override selectively.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::Type;

/// Root contract of the managed-object hierarchy.
///
/// All methods are total: the defaults never fail, and `finalize` must not
/// panic (see [`run_finalizer`](crate::reclaim::run_finalizer)). The trait
/// deliberately defines no equality and no operators; those are layered
/// above this crate.
pub trait Object: Any {
    /// Identity of the most-derived runtime type.
    ///
    /// The default derives the handle from the implementing type itself,
    /// never from instance state, so it is safe to call from `stringify`,
    /// `hash_code`, or `finalize` overrides without recursion risk, and it
    /// returns the same handle for the whole life of the instance.
    /// Implementations are expected to leave the default in place;
    /// identity checks elsewhere go through [`Any::type_id`] and cannot be
    /// overridden.
    fn type_of(&self) -> Type {
        Type::of::<Self>()
    }

    /// Human-readable rendering of the instance.
    ///
    /// Defaults to the canonical name of the runtime type. Richer
    /// renderings are up to each type; the default format is not stable
    /// across versions. Never fails.
    fn stringify(&self) -> String {
        Type::of::<Self>().name().to_string()
    }

    /// Digest used by associative containers.
    ///
    /// Defaults to a constant: correct against any equality the hosted
    /// language later defines, with no distribution to speak of. An
    /// override must keep equal instances hashing equally; nothing here
    /// checks that. Never fails.
    fn hash_code(&self) -> usize {
        0
    }

    /// Hook invoked exactly once, right before the instance's storage is
    /// reclaimed.
    ///
    /// The base behavior releases nothing. Types owning external
    /// resources override this to let them go. Must not panic: the
    /// reclamation path cannot be interrupted and treats an unwinding
    /// finalizer as fatal.
    fn finalize(&mut self) {}
}

impl dyn Object {
    /// Whether the most-derived type of the instance is exactly `T`.
    pub fn is<T: Object>(&self) -> bool {
        let concrete = self.type_id();
        concrete == TypeId::of::<T>()
    }

    /// Borrow the instance as its concrete type `T`.
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        if self.is::<T>() {
            // SAFETY: is::<T> confirmed the concrete type via Any::type_id,
            // so dropping the vtable half of the pointer yields a valid &T.
            Some(unsafe { &*(self as *const dyn Object as *const T) })
        } else {
            None
        }
    }

    /// Mutably borrow the instance as its concrete type `T`.
    pub fn downcast_mut<T: Object>(&mut self) -> Option<&mut T> {
        if self.is::<T>() {
            // SAFETY: same type check as downcast_ref; the &mut borrow of
            // self is handed over to the returned reference.
            Some(unsafe { &mut *(self as *mut dyn Object as *mut T) })
        } else {
            None
        }
    }
}

impl fmt::Display for dyn Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl fmt::Debug for dyn Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({})", self.type_of().short_name())
    }
}

/// Feeds [`Object::hash_code`] into std hashers, so trait objects plug
/// into [`FastHashMap`](crate::types::FastHashMap)-style containers once a
/// key wrapper supplies equality.
impl Hash for dyn Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.hash_code());
    }
}
