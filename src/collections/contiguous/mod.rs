//! Contiguous collection types. Currently only [`DynArray`], a runtime-sized
//! but fixed-capacity owning buffer, together with its cursors.
#![warn(missing_docs)]

pub mod dyn_array;

#[doc(inline)]
pub use dyn_array::DynArray;
