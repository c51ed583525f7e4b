use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index or dereference referred to a slot that holds no element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The slot that was asked for.
    pub index: usize,
    /// The number of elements in the buffer.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} is out of bounds for a buffer holding {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A cursor was asked to move to a slot outside `0..=len`.
///
/// Note that the past-the-end slot (`len` itself) is a valid position to move
/// to, just not to read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekOutOfBounds {
    /// The slot the cursor was asked to move to.
    pub target: isize,
    /// The number of elements in the buffer.
    pub len: usize,
}

impl Display for SeekOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot move a cursor to slot {}; the valid positions are 0..={}!", self.target, self.len)
    }
}

impl Error for SeekOutOfBounds {}

/// The cursor is not bound to any buffer; a default-constructed cursor can
/// only be compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorUnbound;

impl Display for CursorUnbound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The cursor is not bound to a buffer!")
    }
}

impl Error for CursorUnbound {}

/// Any of the ways a cursor operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CursorError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`SeekOutOfBounds`].
    SeekOutOfBounds(SeekOutOfBounds),
    /// See [`CursorUnbound`].
    Unbound(CursorUnbound),
}
