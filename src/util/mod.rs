//! Crate-private helpers for unit tests.

pub mod alloc;
pub mod panic;
