//! Optional-value wrapper produced by safe-navigation access.
//!
//! The evaluator materializes a `Nullable` at each link of a `?.`-style
//! access chain and checks `has_value` before following the next link, so
//! absence short-circuits without the wrapper knowing anything about
//! chaining. The surface is deliberately minimal: presence check and read.
//! Combinators over absence belong to the layers above, not here.

use crate::errors::{InvalidOperationState, messages};

/// A value of type `T`, or nothing.
///
/// Immutable once constructed. The wrapper owns its payload exclusively
/// until the payload is moved out with [`Nullable::into_value`].
#[derive(Clone, Debug)]
pub struct Nullable<T> {
    slot: Option<T>,
}

impl<T> Nullable<T> {
    /// An absent value.
    pub const fn empty() -> Self {
        Self { slot: None }
    }

    /// A present value, taking ownership of `value`.
    pub const fn of(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// Whether a payload is present. Pure query, never fails.
    pub const fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// Borrow the payload.
    ///
    /// Fails with [`InvalidOperationState`] when the value is absent.
    /// That failure signals a call-site defect: check
    /// [`has_value`](Nullable::has_value) first, or propagate the error
    /// up the access chain.
    pub fn value(&self) -> Result<&T, InvalidOperationState> {
        match &self.slot {
            Some(value) => Ok(value),
            None => Err(InvalidOperationState::new(
                messages::NULLABLE_VALUE,
                messages::REQUIRES_PRESENT_VALUE,
            )),
        }
    }

    /// Move the payload out of the wrapper.
    ///
    /// Same failure contract as [`value`](Nullable::value).
    pub fn into_value(self) -> Result<T, InvalidOperationState> {
        match self.slot {
            Some(value) => Ok(value),
            None => Err(InvalidOperationState::new(
                messages::NULLABLE_INTO_VALUE,
                messages::REQUIRES_PRESENT_VALUE,
            )),
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::empty()
    }
}
