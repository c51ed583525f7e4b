use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::ptr::NonNull;

use super::{CursorError, CursorUnbound, IndexOutOfBounds, SeekOutOfBounds};
#[allow(unused)]
use super::DynArray;

/// A copyable traversal handle referencing a single slot of a [`DynArray`].
///
/// A cursor is an index paired with a borrowed, non-owning descriptor of the
/// buffer's storage (base pointer and length). The borrow is carried as the
/// lifetime `'a`, so the buffer can neither move nor be dropped while any
/// cursor over it is alive.
///
/// Valid positions are `0..=len`; the past-the-end position is a valid place
/// to stand but not to read from. Every boundary is an explicit choice:
///
/// - Checked access returns a [`CursorError`]: [`get`](Cursor::get),
///   [`peek`](Cursor::peek), [`try_seek`](Cursor::try_seek) and friends.
/// - Operator sugar (`+`, `-`, `+=`, `-=`, cursor difference) panics with the
///   same error's message, for walks whose bounds are known by construction.
/// - [`get_unchecked`](Cursor::get_unchecked) and
///   [`seek_unchecked`](Cursor::seek_unchecked) skip the check entirely, as a
///   documented `unsafe` precondition rather than a silent one.
///
/// Two cursors compare equal iff they reference the same slot of the same
/// buffer; ordering compares slot positions, and
/// [`partial_cmp`](PartialOrd::partial_cmp) answers [`None`] for cursors over
/// different buffers. A default-constructed cursor is *unbound*: it references
/// no buffer, compares equal to other unbound cursors and refuses everything
/// else with [`CursorUnbound`].
///
/// # Examples
/// ```
/// # use seq_basics::collections::contiguous::DynArray;
/// let arr = DynArray::from([10, 20, 30]);
/// let mut cur = arr.cursor();
///
/// assert_eq!(cur.get(), Ok(&10));
/// assert_eq!(cur.peek(2), Ok(&30));
///
/// cur += 2;
/// assert_eq!(cur.get(), Ok(&30));
/// assert_eq!(arr.cursor_end() - cur, 1);
/// ```
pub struct Cursor<'a, T> {
    base: Option<NonNull<T>>,
    len: usize,
    pos: usize,
    _buf: PhantomData<&'a [T]>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn over(base: NonNull<T>, len: usize, pos: usize) -> Cursor<'a, T> {
        Cursor {
            base: Some(base),
            len,
            pos,
            _buf: PhantomData,
        }
    }

    /// Creates a cursor bound to no buffer. Unbound cursors compare equal to
    /// each other and fail every access or movement with [`CursorUnbound`].
    pub const fn unbound() -> Cursor<'a, T> {
        Cursor {
            base: None,
            len: 0,
            pos: 0,
            _buf: PhantomData,
        }
    }

    /// The slot this cursor references, counted from the front of the buffer.
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The length of the buffer this cursor is bound to (0 when unbound).
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether this cursor is bound to a buffer.
    pub const fn is_bound(&self) -> bool {
        self.base.is_some()
    }

    /// Whether this cursor stands at the past-the-end position of its buffer.
    pub const fn is_end(&self) -> bool {
        self.base.is_some() && self.pos == self.len
    }

    /// Returns a reference to the slot this cursor stands on.
    ///
    /// Fails with [`CursorUnbound`] for an unbound cursor and
    /// [`IndexOutOfBounds`] at the past-the-end position.
    pub fn get(&self) -> Result<&'a T, CursorError> {
        self.peek(0)
    }

    /// Returns a reference to the slot at a signed `offset` from this cursor,
    /// without moving the cursor.
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// let arr = DynArray::from([1, 2, 3]);
    /// let cur = arr.cursor_end();
    /// assert_eq!(cur.peek(-1), Ok(&3));
    /// assert!(cur.peek(0).is_err());
    /// ```
    pub fn peek(&self, offset: isize) -> Result<&'a T, CursorError> {
        let base = self.base.ok_or(CursorUnbound)?;
        let slot = target_slot(self.pos, offset, self.len)?;

        if slot < self.len {
            // SAFETY: slot < len, so it refers to an initialized element
            // inside the allocation borrowed for 'a.
            Ok(unsafe { base.add(slot).as_ref() })
        } else {
            Err(IndexOutOfBounds {
                index: slot,
                len: self.len,
            }
            .into())
        }
    }

    /// Shifts the cursor by a signed `offset`, which must land in `0..=len`.
    /// On failure the cursor is left where it was.
    pub fn try_seek(&mut self, offset: isize) -> Result<(), CursorError> {
        self.base.ok_or(CursorUnbound)?;
        self.pos = target_slot(self.pos, offset, self.len)?;
        Ok(())
    }

    /// Steps the cursor forward by one slot.
    pub fn try_advance(&mut self) -> Result<(), CursorError> {
        self.try_seek(1)
    }

    /// Steps the cursor backward by one slot.
    pub fn try_retreat(&mut self) -> Result<(), CursorError> {
        self.try_seek(-1)
    }

    /// Returns a reference to the slot this cursor stands on, with no checks.
    ///
    /// # Safety
    /// The cursor must be bound and must not stand at the past-the-end
    /// position.
    pub unsafe fn get_unchecked(&self) -> &'a T {
        debug_assert!(self.base.is_some() && self.pos < self.len);
        // SAFETY: The caller guarantees the cursor is bound with pos < len,
        // so the slot is an initialized element borrowed for 'a.
        unsafe { self.base.unwrap_unchecked().add(self.pos).as_ref() }
    }

    /// Shifts the cursor by a signed `offset`, with no checks.
    ///
    /// # Safety
    /// The cursor must be bound and `pos + offset` must land in `0..=len`.
    pub unsafe fn seek_unchecked(&mut self, offset: isize) {
        debug_assert!(self.base.is_some());
        self.pos = self.pos.wrapping_add_signed(offset);
        debug_assert!(self.pos <= self.len);
    }

    /// Returns the signed slot distance from `other` to `self`, or [`None`]
    /// when the cursors do not share a buffer (including when either is
    /// unbound).
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// let arr = DynArray::from([1, 2, 3, 4]);
    /// assert_eq!(arr.cursor_end().distance_from(&arr.cursor()), Some(4));
    /// ```
    pub fn distance_from(&self, other: &Self) -> Option<isize> {
        match (self.base, other.base) {
            (Some(lhs), Some(rhs)) if lhs == rhs => {
                Some(self.pos as isize - other.pos as isize)
            }
            _ => None,
        }
    }
}

/// Computes `pos + offset` and bounds-checks it against `0..=len`.
fn target_slot(pos: usize, offset: isize, len: usize) -> Result<usize, CursorError> {
    let target = (pos as isize).checked_add(offset);

    match target {
        Some(slot) if (0..=len as isize).contains(&slot) => Ok(slot as usize),
        _ => Err(SeekOutOfBounds {
            target: target.unwrap_or(isize::MAX),
            len,
        }
        .into()),
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Default for Cursor<'_, T> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<T> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("bound", &self.is_bound())
            .field("pos", &self.pos)
            .field("len", &self.len)
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    /// Two cursors are equal iff they reference the same slot of the same
    /// buffer, or are both unbound. Equality between cursors over different
    /// buffers is well-defined but unspecified (it compares storage
    /// addresses).
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    /// Orders by slot position when both cursors share a buffer; answers
    /// [`None`] otherwise.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self.base, other.base) {
            (Some(lhs), Some(rhs)) if lhs == rhs => self.pos.partial_cmp(&other.pos),
            (None, None) => Some(std::cmp::Ordering::Equal),
            _ => None,
        }
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    /// Compound offset; the panicking counterpart of
    /// [`try_seek`](Cursor::try_seek).
    ///
    /// # Panics
    /// Panics if the cursor is unbound or the target slot falls outside
    /// `0..=len`.
    fn add_assign(&mut self, offset: isize) {
        if let Err(e) = self.try_seek(offset) {
            panic!("{e}");
        }
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    /// Compound offset; see [`AddAssign`](Cursor::add_assign).
    ///
    /// # Panics
    /// Panics if the cursor is unbound or the target slot falls outside
    /// `0..=len`.
    fn sub_assign(&mut self, offset: isize) {
        *self += offset.checked_neg().expect("Offset negation overflowed!");
    }
}

impl<'a, T> Add<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    /// Returns a cursor shifted forward by `offset`.
    ///
    /// # Panics
    /// Panics if the cursor is unbound or the target slot falls outside
    /// `0..=len`.
    fn add(self, offset: isize) -> Self::Output {
        let mut out = self;
        out += offset;
        out
    }
}

impl<'a, T> Sub<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    /// Returns a cursor shifted backward by `offset`.
    ///
    /// # Panics
    /// Panics if the cursor is unbound or the target slot falls outside
    /// `0..=len`.
    fn sub(self, offset: isize) -> Self::Output {
        let mut out = self;
        out -= offset;
        out
    }
}

impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    /// Signed slot distance between two cursors over the same buffer; the
    /// panicking counterpart of [`distance_from`](Cursor::distance_from).
    ///
    /// # Panics
    /// Panics if the cursors do not share a buffer.
    fn sub(self, rhs: Self) -> Self::Output {
        self.distance_from(&rhs)
            .expect("Cannot take the distance between cursors over different buffers!")
    }
}

// SAFETY: A Cursor is a shared view into the buffer, like &[T]; it can move
// between or be shared across threads when T: Sync.
unsafe impl<T: Sync> Send for Cursor<'_, T> {}
// SAFETY: As above.
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

/// The exclusive counterpart of [`Cursor`]: borrows its [`DynArray`] mutably
/// and can therefore hand out mutable references to the slot it stands on.
///
/// Movement and boundary semantics are identical to [`Cursor`]; the operator
/// sugar is omitted because an exclusive cursor is not copyable.
///
/// # Examples
/// ```
/// # use seq_basics::collections::contiguous::DynArray;
/// let mut arr = DynArray::from([1, 2, 3]);
/// let mut cur = arr.cursor_mut();
///
/// cur.try_advance()?;
/// *cur.get_mut()? = 20;
/// assert_eq!(cur.replace(200)?, 20);
///
/// drop(cur);
/// assert_eq!(&*arr, &[1, 200, 3]);
/// # Ok::<(), seq_basics::collections::contiguous::dyn_array::CursorError>(())
/// ```
pub struct CursorMut<'a, T> {
    base: Option<NonNull<T>>,
    len: usize,
    pos: usize,
    _buf: PhantomData<&'a mut [T]>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) const fn over(base: NonNull<T>, len: usize, pos: usize) -> CursorMut<'a, T> {
        CursorMut {
            base: Some(base),
            len,
            pos,
            _buf: PhantomData,
        }
    }

    /// Creates an exclusive cursor bound to no buffer.
    pub const fn unbound() -> CursorMut<'a, T> {
        CursorMut {
            base: None,
            len: 0,
            pos: 0,
            _buf: PhantomData,
        }
    }

    /// The slot this cursor references, counted from the front of the buffer.
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The length of the buffer this cursor is bound to (0 when unbound).
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether this cursor is bound to a buffer.
    pub const fn is_bound(&self) -> bool {
        self.base.is_some()
    }

    /// Whether this cursor stands at the past-the-end position of its buffer.
    pub const fn is_end(&self) -> bool {
        self.base.is_some() && self.pos == self.len
    }

    /// Returns a reference to the slot this cursor stands on.
    pub fn get(&self) -> Result<&T, CursorError> {
        let base = self.base.ok_or(CursorUnbound)?;

        if self.pos < self.len {
            // SAFETY: pos < len, so the slot is an initialized element; the
            // returned borrow is tied to &self.
            Ok(unsafe { base.add(self.pos).as_ref() })
        } else {
            Err(IndexOutOfBounds {
                index: self.pos,
                len: self.len,
            }
            .into())
        }
    }

    /// Returns a mutable reference to the slot this cursor stands on.
    pub fn get_mut(&mut self) -> Result<&mut T, CursorError> {
        let base = self.base.ok_or(CursorUnbound)?;

        if self.pos < self.len {
            // SAFETY: pos < len, so the slot is an initialized element. The
            // cursor holds the buffer's only borrow and the returned borrow
            // is tied to &mut self, so no aliasing can occur.
            Ok(unsafe { base.add(self.pos).as_mut() })
        } else {
            Err(IndexOutOfBounds {
                index: self.pos,
                len: self.len,
            }
            .into())
        }
    }

    /// Writes `value` into the slot this cursor stands on, returning the
    /// previous value.
    pub fn replace(&mut self, value: T) -> Result<T, CursorError> {
        Ok(std::mem::replace(self.get_mut()?, value))
    }

    /// Shifts the cursor by a signed `offset`, which must land in `0..=len`.
    /// On failure the cursor is left where it was.
    pub fn try_seek(&mut self, offset: isize) -> Result<(), CursorError> {
        self.base.ok_or(CursorUnbound)?;
        self.pos = target_slot(self.pos, offset, self.len)?;
        Ok(())
    }

    /// Steps the cursor forward by one slot.
    pub fn try_advance(&mut self) -> Result<(), CursorError> {
        self.try_seek(1)
    }

    /// Steps the cursor backward by one slot.
    pub fn try_retreat(&mut self) -> Result<(), CursorError> {
        self.try_seek(-1)
    }

    /// Returns a mutable reference to the slot this cursor stands on, with no
    /// checks.
    ///
    /// # Safety
    /// The cursor must be bound and must not stand at the past-the-end
    /// position.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.base.is_some() && self.pos < self.len);
        // SAFETY: The caller guarantees the cursor is bound with pos < len.
        // The cursor holds the buffer's only borrow and the returned borrow
        // is tied to &mut self.
        unsafe { self.base.unwrap_unchecked().add(self.pos).as_mut() }
    }
}

impl<T> Default for CursorMut<'_, T> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<T> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("bound", &self.is_bound())
            .field("pos", &self.pos)
            .field("len", &self.len)
            .finish()
    }
}

// SAFETY: A CursorMut is an exclusive view into the buffer, like &mut [T]; it
// can move between threads when T: Send and be shared (read-only) when
// T: Sync.
unsafe impl<T: Send> Send for CursorMut<'_, T> {}
// SAFETY: As above.
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
