//! General-purpose collection types.
//!
//! # Method
//! [`DynArray`](contiguous::DynArray) implements
//! [`Deref<Target = [T]>`](std::ops::Deref) (and `DerefMut`), which keeps the
//! slice-shaped parts of its API out of this crate entirely. Everything a
//! slice can't express - ownership, construction, checked lookup and cursors -
//! lives here.

pub mod contiguous;
pub mod linear;
