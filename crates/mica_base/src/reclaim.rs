//! Storage reclamation hooks - base types.
//!
//! The collector that decides *when* an instance dies lives outside this
//! crate. What lives here is the contract for the moment it does: the
//! finalizer runs exactly once, with exclusive access, and an unwinding
//! finalizer is fatal. [`Managed`] maps that contract onto deterministic
//! scope exit for hosts without a collector. No ordering is guaranteed
//! between the finalizers of unrelated instances.

use std::ops::{Deref, DerefMut};
use std::process;

use crate::object::Object;

/// Invoke an instance's finalizer on behalf of the reclamation path.
///
/// Exclusive access for the duration of the call comes from the `&mut`
/// borrow. The reclamation machinery cannot be interrupted, so a
/// finalizer that unwinds aborts the process instead of propagating.
pub fn run_finalizer(instance: &mut dyn Object) {
    let fence = UnwindFence;
    instance.finalize();
    std::mem::forget(fence);
}

/// Dropped only when a finalizer unwinds past it.
struct UnwindFence;

impl Drop for UnwindFence {
    fn drop(&mut self) {
        eprintln!("fatal: finalizer panicked during reclamation");
        process::abort();
    }
}

/// Owning cell that finalizes its instance when the cell goes away.
///
/// Finalization happens exactly once: eagerly through
/// [`Managed::reclaim`], or at drop. Storage is released after the hook
/// returns, then the payload's own `Drop` (if any) runs as usual.
pub struct Managed<T: Object> {
    slot: Option<T>,
}

impl<T: Object> Managed<T> {
    /// Take ownership of `value` and manage its end of life.
    pub fn new(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// Finalize and release the instance now instead of at end of scope.
    pub fn reclaim(mut self) {
        self.finalize_slot();
    }

    fn finalize_slot(&mut self) {
        if let Some(value) = self.slot.as_mut() {
            run_finalizer(value);
            self.slot = None;
        }
    }
}

impl<T: Object> Deref for Managed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.slot.as_ref().expect("instance was already reclaimed")
    }
}

impl<T: Object> DerefMut for Managed<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.slot.as_mut().expect("instance was already reclaimed")
    }
}

impl<T: Object> Drop for Managed<T> {
    fn drop(&mut self) {
        self.finalize_slot();
    }
}
