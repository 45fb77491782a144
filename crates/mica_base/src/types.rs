//! Type identity handles.
//!
//! A [`Type`] names the most-derived runtime type of a managed instance.
//! Handles are copy-cheap, stable for the life of the process, and compare
//! by identity (the underlying [`TypeId`]), never by name. The reflection
//! layer that would consume these handles for deeper introspection lives
//! outside this crate.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use ahash::RandomState;
use hashbrown::HashMap;

/// Identity of a runtime type.
#[derive(Clone, Copy, Debug)]
pub struct Type {
    id: TypeId,
    name: &'static str,
}

impl Type {
    /// Handle for the concrete type `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Type {
        Type {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Unique identifier backing this handle.
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Canonical (fully qualified) name of the type. Never empty.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name with the leading module path stripped.
    ///
    /// Path segments inside generic parameters keep their qualification;
    /// only the outermost path is trimmed.
    pub fn short_name(&self) -> &'static str {
        let bytes = self.name.as_bytes();
        let mut depth = 0usize;
        let mut start = 0usize;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'<' | b'(' | b'[' => depth += 1,
                b'>' | b')' | b']' => depth = depth.saturating_sub(1),
                b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                    start = i + 2;
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }
        &self.name[start..]
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Hash map wired to the runtime's standard hasher.
///
/// `Type` is the canonical key; object digests from
/// [`Object::hash_code`](crate::Object::hash_code) feed the same hasher
/// family.
pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

pub fn fast_hasher() -> RandomState {
    RandomState::with_seeds(0, 0, 0, 0)
}

pub fn fast_map_new<K: Eq + Hash, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(fast_hasher())
}

pub fn fast_map_with_capacity<K: Eq + Hash, V>(cap: usize) -> FastHashMap<K, V> {
    HashMap::with_capacity_and_hasher(cap, fast_hasher())
}
