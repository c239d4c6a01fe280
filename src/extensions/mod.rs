//! Host-facing extension hooks.
//!
//! Observers only see read-only context and never mutate engine internals.

pub mod observers;

pub use observers::{FnObserver, MoveContext, MoveObserver, MoveReason};
