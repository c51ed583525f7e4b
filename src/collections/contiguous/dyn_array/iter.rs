use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use super::DynArray;

impl<T> IntoIterator for DynArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let result = IntoIter {
            ptr: self.ptr,
            front: 0,
            back: self.size,
            cap: self.size,
            _phantom: PhantomData,
        };
        mem::forget(self);
        result
    }
}

/// An owned iterator over a [`DynArray`]. See [`DynArray::into_iter`].
///
/// Elements in `front..back` are still live; everything outside that window
/// has been moved out. Dropping the iterator drops the live window and then
/// releases the allocation, so the exactly-once release contract of the
/// buffer is preserved across iteration.
pub struct IntoIter<T> {
    ptr: NonNull<T>,
    front: usize,
    back: usize,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.front..self.back {
            // SAFETY: Slots in front..back haven't been read out yet, so they
            // hold initialized elements inside the allocation.
            unsafe { ptr::drop_in_place(self.ptr.add(i).as_ptr()) }
        }

        let layout = DynArray::<T>::make_layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator for cap
            // elements; zero-sized layouts were never allocated.
            unsafe { std::alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            // SAFETY: front < back <= cap, so the slot holds an initialized
            // element; bumping front afterwards marks it as moved out.
            let value = unsafe { self.ptr.add(self.front).read() };
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: The newly decremented back is in front..cap, so the
            // slot holds an initialized element that is now marked as moved
            // out.
            let value = unsafe { self.ptr.add(self.back).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

// Borrowed iteration comes from Deref<Target = [T]>: iter and iter_mut are
// the slice's own.
