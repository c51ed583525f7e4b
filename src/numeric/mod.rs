//! Reduction and prefix-scan routines over sequences.
//!
//! Three shapes of operation live here:
//!
//! 1. Reductions, which fold a whole sequence into one result:
//!    [`reduce`] and [`inner_product`].
//! 2. Prefix scans, which keep every intermediate of a reduction:
//!    [`inclusive_scan`] and [`exclusive_scan`].
//! 3. Adjacent operations, which combine consecutive pairs:
//!    [`adjacent_difference`].
//!
//! Plus [`iota`], the generator that fills a buffer with an arithmetic
//! sequence. Routines that produce a sequence return a freshly allocated
//! [`DynArray`](crate::collections::contiguous::DynArray).
//!
//! The defining relationship between the first two shapes: the final element
//! of an inclusive scan equals the full reduction of the same input.

mod reduce;
mod scan;

pub use reduce::*;
pub use scan::*;
