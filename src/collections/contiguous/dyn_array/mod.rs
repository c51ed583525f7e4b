//! A module containing [`DynArray`] and associated types.
//!
//! Borrowed iteration uses [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] via deref; owned
//! iteration uses [`IntoIter`]. Position-tracking traversal is provided by
//! [`Cursor`] and [`CursorMut`], which are deliberately richer than the slice
//! iterators: they can step both ways, jump by arbitrary offsets and report
//! distances.
//!
//! [`DynArray`] is also re-exported under the parent module.

mod cursor;
mod dyn_array;
mod error;
mod iter;
mod tests;

pub use cursor::*;
pub use dyn_array::*;
pub use error::*;
pub use iter::*;
