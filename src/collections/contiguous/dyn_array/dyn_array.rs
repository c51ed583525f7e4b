use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use super::{Cursor, CursorMut, IndexOutOfBounds};

/// An owning contiguous buffer whose size is chosen at runtime and fixed from
/// then on. Similar to a [`Box<[T]>`](Box<T>), with its construction and
/// release machinery written out in full.
///
/// # Invariant
/// `ptr` either dangles (zero-sized layouts are never allocated) or refers to
/// exactly `size` valid, constructed elements. The backing storage is released
/// exactly once, when the buffer is dropped - including when it is dropped
/// because an assignment replaced it.
///
/// # Mutation
/// The buffer's contents can be mutated through element access
/// ([`get_mut`](DynArray::get_mut), indexing, [`CursorMut`]) but its length
/// cannot change; growing means building a new buffer.
pub struct DynArray<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> DynArray<T> {
    /// Returns the number of elements in the buffer.
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// let arr = DynArray::from([1, 2, 3]);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new buffer with size 0.
    ///
    /// Because the size is fixed after construction, this is mostly useful as
    /// a placeholder; see [`DynArray::repeat_default`], [`DynArray::from`] or
    /// [`DynArray::new_uninit`] for buffers that hold something.
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// let arr: DynArray<u8> = DynArray::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> DynArray<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new buffer of [`MaybeUninit<T>`] with the provided `size`.
    /// All slots are uninitialized.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// # use std::mem::MaybeUninit;
    /// let arr: DynArray<MaybeUninit<u8>> = DynArray::new_uninit(5);
    /// assert_eq!(arr.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> DynArray<MaybeUninit<T>> {
        let layout = DynArray::<MaybeUninit<T>>::make_layout(size);
        let ptr = DynArray::<MaybeUninit<T>>::make_ptr(layout);

        DynArray {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a buffer from any iterator which reports its exact length.
    ///
    /// The reported length is validated while filling: an iterator that lies
    /// about its length causes a panic rather than touching memory outside
    /// the allocation.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`], or if
    /// the iterator yields a different number of items than it reported.
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// let arr = DynArray::from_iter_exact(0..5);
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4]);
    /// ```
    pub fn from_iter_exact<I>(values: I) -> DynArray<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = values.into_iter();
        let size = iter.len();
        let arr = Self::new_uninit(size);

        let mut written = 0;
        for item in iter {
            assert!(written < size, "Iterator yielded more items than its reported length!");
            // SAFETY: written < size, so the offset is within the allocation
            // and can't overflow isize::MAX.
            unsafe {
                arr.ptr.add(written).write(MaybeUninit::new(item));
            }
            written += 1;
        }
        assert_eq!(written, size, "Iterator yielded fewer items than its reported length!");

        // SAFETY: Exactly one value was written to each of the size slots.
        unsafe { arr.assume_init() }
    }

    /// Returns a reference to the element at `index`, or a strongly typed
    /// error when the index is out of bounds.
    ///
    /// Plain indexing (`arr[index]`) is also available through deref to
    /// [`[T]`](slice) and panics instead.
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// let arr = DynArray::from([4, 5, 6]);
    /// assert_eq!(arr.get(1), Ok(&5));
    /// assert!(arr.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.deref().get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.size,
        })
    }

    /// Returns a mutable reference to the element at `index`, or a strongly
    /// typed error when the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.size;
        self.deref_mut()
            .get_mut(index)
            .ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a [`Cursor`] referencing the buffer's first slot (which, for an
    /// empty buffer, is the past-the-end position).
    pub const fn cursor(&self) -> Cursor<'_, T> {
        Cursor::over(self.ptr, self.size, 0)
    }

    /// Returns a [`Cursor`] at the past-the-end position, useful as the far
    /// limit when walking or measuring distances.
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// let arr = DynArray::from([1, 2, 3]);
    /// assert_eq!(arr.cursor_end() - arr.cursor(), 3);
    /// ```
    pub const fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::over(self.ptr, self.size, self.size)
    }

    /// Returns a [`Cursor`] at `index`, which may be any slot in
    /// `0..=size` (the past-the-end position is a valid place to stand, just
    /// not to read from).
    pub fn cursor_at(&self, index: usize) -> Result<Cursor<'_, T>, IndexOutOfBounds> {
        if index <= self.size {
            Ok(Cursor::over(self.ptr, self.size, index))
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.size,
            })
        }
    }

    /// Returns a [`CursorMut`] referencing the buffer's first slot. The
    /// cursor borrows the buffer exclusively for as long as it lives.
    pub const fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::over(self.ptr, self.size, 0)
    }
}

impl<T> DynArray<T> {
    /// A helper function to create a [`Layout`] for use during allocation,
    /// containing `size` number of elements of type `T`.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).expect("Capacity overflow!")
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`].
    /// Returns a dangling pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls
    /// [`alloc::handle_alloc_error`] as recommended, to avoid new allocations
    /// rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Clone> DynArray<T> {
    /// Creates a new buffer holding `count` clones of `item`.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// let arr = DynArray::repeat_item(5, 3);
    /// assert_eq!(&*arr, &[5, 5, 5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> DynArray<T> {
        let arr = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: i < count, so the offset is within the allocation and
            // can't overflow isize::MAX.
            unsafe {
                arr.ptr.add(i).write(MaybeUninit::new(item.clone()));
            }
        }

        // SAFETY: All slots are initialized with a clone of item.
        unsafe { arr.assume_init() }
    }
}

impl<T: Default> DynArray<T> {
    /// Creates a new buffer by repeating the default value of `T` `count`
    /// times.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn repeat_default(count: usize) -> DynArray<T> {
        let arr = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: i < count, so the offset is within the allocation and
            // can't overflow isize::MAX.
            unsafe {
                arr.ptr.add(i).write(MaybeUninit::new(T::default()));
            }
        }

        // SAFETY: All slots are initialized with the default value for T.
        unsafe { arr.assume_init() }
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    /// Creates a buffer from an array literal, the closest Rust gets to list
    /// initialization.
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// let arr = DynArray::from([1, 2, 3]);
    /// assert_eq!(&*arr, &[1, 2, 3]);
    /// ```
    fn from(values: [T; N]) -> Self {
        Self::from_iter_exact(values)
    }
}

impl<T> DynArray<MaybeUninit<T>> {
    /// Converts a `DynArray<MaybeUninit<T>>` to `MaybeUninit<DynArray<T>>`.
    pub fn transpose(self) -> MaybeUninit<DynArray<T>> {
        // SAFETY: DynArray<MaybeUninit<T>> has the same layout as
        // MaybeUninit<DynArray<T>>.
        unsafe { mem::transmute(self) }
    }

    /// Assume that all slots of a `DynArray<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that every slot holds an
    /// initialized value. Failing to do so is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use seq_basics::collections::contiguous::DynArray;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = DynArray::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> DynArray<T> {
        // SAFETY: There are no safety guarantees here, responsibility is
        // passed to the caller.
        unsafe { self.transpose().assume_init() }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        let layout = DynArray::<T>::make_layout(self.size);

        for i in 0..self.size {
            // SAFETY: The pointer is nonnull, properly aligned and refers to
            // an initialized element that is ready to drop; i < size keeps
            // the offset inside the allocation.
            unsafe {
                ptr::drop_in_place(self.ptr.add(i).as_ptr());
            }
        }

        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this
            // exact layout. Zero-sized layouts aren't allocated and are
            // guarded against deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore
        // valid and properly aligned for (size * size_of::<T>()) bytes. All
        // elements are initialized and size is no greater than isize::MAX.
        // The safe API never hands out raw pointers, so the borrow checker
        // prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref, plus: this method takes &mut self, so the
        // borrow checker guarantees exclusive access for the lifetime of the
        // slice.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: A DynArray uniquely owns its allocation, so sending it to another
// thread moves the data with it. Safe when T: Send.
unsafe impl<T: Send> Send for DynArray<T> {}
// SAFETY: The safe API obeys the borrow checker, so no interior mutability
// occurs. Safe to share when T: Sync.
unsafe impl<T: Sync> Sync for DynArray<T> {}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        DynArray::from_iter_exact(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
