//! This crate is a study of the machinery underneath contiguous containers: an
//! owning fixed-capacity buffer, a position-tracking cursor over it, a
//! fixed-entry lookup table and the reduction / prefix-scan routines that
//! operate on sequences.
//!
//! # Purpose
//! Each module here exists to make one piece of library plumbing visible that
//! `std` normally hides: how a heap buffer owns and releases its storage, what
//! a random-access cursor actually promises at its boundaries, and what a
//! "not found" lookup should hand back to its caller. None of it is intended
//! to outperform `std`; all of it is intended to be readable.
//!
//! # Boundary Checks
//! The cursor type descends from the classic raw-pointer iterator, whose
//! out-of-range behavior is simply undefined. Here every
//! boundary is an explicit choice instead: checked methods return strongly
//! typed [`Result`]s, operator sugar panics with the same error message, and
//! the unchecked tier only exists behind `unsafe fn` with its preconditions
//! spelled out.
//!
//! # Error Handling
//! Errors are strongly typed: one struct per condition with a hand-written
//! [`Display`](std::fmt::Display) and [`Error`](std::error::Error) impl, and
//! enums (static dispatch, no boxing) where a method can fail in more than one
//! way. Methods that exist for ergonomics rather than recovery panic instead,
//! and say so in their docs.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod lifecycle;
pub mod numeric;

#[cfg(test)]
pub(crate) mod util;
