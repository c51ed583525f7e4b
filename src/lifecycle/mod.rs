//! Polymorphic ownership with deterministic teardown order.
//!
//! Instead of an open inheritance chain torn down through a base pointer,
//! this module uses a *closed* set of capability levels, each level a struct
//! wrapping the previous one, and a [`Store`] enum to own any of them behind
//! one type. Rust drops a value before its fields, so dropping the outermost
//! level runs each level's teardown from leaf to base - the same order a
//! virtual destructor chain guarantees, but enforced structurally rather than
//! by convention.
//!
//! Every level records its teardown stage in a shared [`TeardownLog`], which
//! is how the order becomes observable (and testable).

mod store;
mod tests;

pub use store::*;
