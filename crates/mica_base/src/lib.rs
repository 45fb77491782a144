//! Base object model for the Mica runtime.
//!
//! This crate contains the two primitives everything else builds on, plus
//! their immediate support types:
//! - `Object` - the universal contract of managed reference types
//!   (identity, rendering, hashing, finalization)
//! - `Nullable` - the optional-value wrapper produced by safe navigation
//! - `Type` - cheap type-identity handles
//! - `Managed` - deterministic, exactly-once finalization of an owned
//!   instance

pub mod errors;
pub mod nullable;
pub mod object;
pub mod reclaim;
pub mod types;

pub use errors::InvalidOperationState;
pub use nullable::Nullable;
pub use object::Object;
pub use reclaim::{Managed, run_finalizer};
pub use types::{FastHashMap, Type, fast_hasher, fast_map_new, fast_map_with_capacity};
