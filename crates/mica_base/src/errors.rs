//! Errors raised by the base object layer.
//!
//! Exactly one kind exists at this level: [`InvalidOperationState`], the
//! fail-fast signal for reading the payload of an absent `Nullable`. It
//! marks a programming defect at the call site, not a recoverable data
//! condition, and is never handled internally; it propagates until some
//! caller renders it.

use std::error::Error;
use std::fmt;

/// Common diagnostic fragments used by this layer.
pub mod messages {
    pub const NULLABLE_VALUE: &str = "Nullable::value";
    pub const NULLABLE_INTO_VALUE: &str = "Nullable::into_value";
    pub const REQUIRES_PRESENT_VALUE: &str = "requires a present value; check has_value first";
}

/// An operation was invoked on a receiver whose state does not permit it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidOperationState {
    operation: &'static str,
    requirement: &'static str,
}

impl InvalidOperationState {
    pub(crate) const fn new(operation: &'static str, requirement: &'static str) -> Self {
        Self {
            operation,
            requirement,
        }
    }

    /// The operation that was rejected.
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// The precondition the caller violated.
    pub const fn requirement(&self) -> &'static str {
        self.requirement
    }
}

impl fmt::Display for InvalidOperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid operation: {} ({})", self.operation, self.requirement)
    }
}

impl Error for InvalidOperationState {}
