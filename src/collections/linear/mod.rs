//! A module containing [`LinearMap`] and its error type.
//!
//! [`LinearMap`] is the simplest associative container that can exist: a fixed
//! set of entries established at construction, searched by linear scan. No
//! hashing, no ordering requirements on the keys, no insertion or removal.

mod error;
mod linear_map;

pub use error::*;
pub use linear_map::*;
