#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::{DropTally, ZeroSized};
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let arr: DynArray<u8> = DynArray::new();
    assert_eq!(arr.size(), 0, "A new buffer should be empty.");
    assert_eq!(&*arr, &[], "An empty buffer should deref to an empty slice.");

    let arr: DynArray<i32> = DynArray::repeat_default(4);
    assert_eq!(&*arr, &[0, 0, 0, 0], "Default-filled buffer should hold default values.");

    let arr = DynArray::repeat_item("ea", 3);
    assert_eq!(&*arr, &["ea", "ea", "ea"], "Copy-filled buffer should hold clones of the item.");

    let arr = DynArray::from([1, 2, 3, 4, 5]);
    assert_eq!(arr.size(), 5);
    assert_eq!(&*arr, &[1, 2, 3, 4, 5], "List-initialized buffer should hold the listed values.");

    let arr = DynArray::from_iter_exact(0..5);
    assert_eq!(&*arr, &[0, 1, 2, 3, 4]);
}

#[test]
fn test_zst_support() {
    let arr = DynArray::<ZeroSized>::repeat_default(5);
    assert_eq!(arr[0], ZeroSized, "Indexing with no offset should work.");
    assert_eq!(arr[4], ZeroSized, "Indexing with an in-bounds offset should work.");
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");
    assert_eq!(arr.cursor_end() - arr.cursor(), 5, "Cursor distances should work for ZSTs.");
}

#[test]
fn test_checked_access() {
    let mut arr = DynArray::from([4, 5, 6]);

    assert_eq!(arr.get(0), Ok(&4));
    assert_eq!(
        arr.get(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Out-of-bounds access should report the index and length."
    );

    *arr.get_mut(2).expect("index 2 is in bounds") = 60;
    assert_eq!(&*arr, &[4, 5, 60]);

    assert_panics!(
        {
            let arr = DynArray::from([1, 2, 3]);
            arr[3]
        },
        "Plain indexing should panic out of bounds."
    );
}

#[test]
fn test_drop() {
    let tally = DropTally::new();
    let arr = DynArray::from_iter_exact(iter::repeat_with(|| tally.clone()).take(10));

    drop(arr);

    assert_eq!(tally.count(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_replacement_frees_once() {
    let tally = DropTally::new();
    let mut arr = DynArray::from_iter_exact(iter::repeat_with(|| tally.clone()).take(4));

    // Whole-buffer reassignment: the old allocation must be released exactly
    // once, at the moment it is superseded.
    arr = DynArray::from_iter_exact(iter::repeat_with(|| tally.clone()).take(2));
    assert_eq!(tally.count(), 4, "Replacing a buffer should drop the old elements once.");

    drop(arr);
    assert_eq!(tally.count(), 6, "Dropping the replacement should drop its own elements.");
}

#[test]
fn test_equality_and_clone() {
    let arr = DynArray::from_iter_exact(0_usize..5);

    assert_eq!(
        arr,
        DynArray::from([0, 1, 2, 3, 4]),
        "Different construction methods should produce equal results."
    );
    assert_ne!(DynArray::from([0, 1, 2, 5, 4]), DynArray::from_iter_exact(0..5));

    let cloned = arr.clone();
    assert_eq!(arr, cloned, "A clone should compare equal to its source.");
    assert_ne!(
        arr.as_ptr(),
        cloned.as_ptr(),
        "A clone should own its own allocation."
    );
}

#[test]
fn test_iterators() {
    let arr = DynArray::from([0_usize, 1, 2, 3, 4]);
    let collected = DynArray::from_iter_exact(arr.iter().cloned());
    assert_eq!(arr, collected, "Collected iter should be equal.");

    let mut owned = arr.clone().into_iter();
    assert_eq!(owned.len(), 5);
    assert_eq!(owned.next(), Some(0));
    assert_eq!(owned.next_back(), Some(4), "Owned iteration should work from both ends.");
    assert_eq!(owned.len(), 3);
    assert_eq!(owned.collect::<Vec<_>>(), vec![1, 2, 3]);

    let tally = DropTally::new();
    let mut partial = DynArray::from_iter_exact(iter::repeat_with(|| tally.clone()).take(6)).into_iter();
    partial.next();
    partial.next_back();
    assert_eq!(tally.count(), 2, "Consumed elements should drop as they are read.");

    drop(partial);
    assert_eq!(tally.count(), 6, "Dropping the iterator should drop the unconsumed window.");
}

#[test]
fn test_lying_iterator_len() {
    struct Short(std::ops::Range<usize>);

    impl Iterator for Short {
        type Item = usize;

        fn next(&mut self) -> Option<usize> {
            self.0.next()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (5, Some(5))
        }
    }

    impl ExactSizeIterator for Short {}

    assert_panics!(
        {
            DynArray::from_iter_exact(Short(0..3))
        },
        "An iterator under-delivering on its reported length should panic, not produce uninitialized slots."
    );
}

#[test]
fn test_cursor_walk() {
    let arr = DynArray::from([10, 20, 30, 40, 50]);

    let mut front = arr.cursor();
    let mut back = arr.cursor_end();

    assert_eq!(front.get(), Ok(&10));
    assert!(back.get().is_err(), "The past-the-end slot should not be dereferenceable.");
    assert_eq!(back.peek(-1), Ok(&50), "Offset reads should work backwards from the end.");

    // Advancing n times from the front and retreating n times from the end
    // should leave a distance of exactly size - 2n.
    for _ in 0..2 {
        front.try_advance().expect("advance stays in bounds");
        back.try_retreat().expect("retreat stays in bounds");
    }
    assert_eq!(back - front, 1, "5 slots minus 2 steps from each side should leave 1.");
    assert_eq!(front.get(), Ok(&30));
    assert_eq!(back.get(), Ok(&40));

    assert_eq!(
        arr.cursor_end().distance_from(&arr.cursor()),
        Some(arr.size() as isize),
        "The begin-to-end distance should be the buffer's size."
    );
}

#[test]
fn test_cursor_bounds() {
    let arr = DynArray::from([1, 2, 3]);
    let mut cur = arr.cursor();

    assert_eq!(
        cur.try_seek(4),
        Err(SeekOutOfBounds { target: 4, len: 3 }.into()),
        "Seeking past the end should fail with the attempted slot."
    );
    assert_eq!(cur.pos(), 0, "A failed seek should leave the cursor in place.");

    assert_eq!(
        cur.try_retreat(),
        Err(SeekOutOfBounds { target: -1, len: 3 }.into()),
        "Retreating before the front should fail."
    );

    cur.try_seek(3).expect("the past-the-end slot is a valid position");
    assert!(cur.is_end());
    assert_eq!(
        cur.get(),
        Err(IndexOutOfBounds { index: 3, len: 3 }.into()),
        "Reading the past-the-end slot should fail."
    );

    assert_panics!(
        {
            let arr = DynArray::from([1, 2, 3]);
            let _ = arr.cursor() + 4;
        },
        "Operator seeks should panic out of bounds."
    );
}

#[test]
fn test_cursor_comparison() {
    let arr = DynArray::from([1, 2, 3]);
    let other = DynArray::from([1, 2, 3]);

    let a = arr.cursor_at(1).expect("index 1 is in bounds");
    let b = arr.cursor() + 1;
    assert_eq!(a, b, "Cursors over the same slot of the same buffer should be equal.");
    assert!(a < arr.cursor_end(), "Ordering should follow slot positions.");

    assert_eq!(
        a.partial_cmp(&other.cursor()),
        None,
        "Cursors over different buffers should not be ordered."
    );
    assert_eq!(
        a.distance_from(&other.cursor()),
        None,
        "Distances across buffers should not exist."
    );

    let unbound_a: Cursor<'_, i32> = Cursor::unbound();
    let unbound_b = Cursor::default();
    assert_eq!(unbound_a, unbound_b, "Two unbound cursors should compare equal.");
    assert_eq!(
        unbound_a.get(),
        Err(CursorUnbound.into()),
        "An unbound cursor should not be dereferenceable."
    );
    assert!(
        unbound_a.partial_cmp(&arr.cursor()).is_none(),
        "An unbound cursor should not be ordered against a bound one."
    );
}

#[test]
fn test_cursor_operator_sugar() {
    let arr = DynArray::from_iter_exact(0..10);
    let mut cur = arr.cursor();

    cur += 7;
    cur -= 3;
    assert_eq!(cur.get(), Ok(&4));

    let shifted = cur + 2;
    assert_eq!(shifted.get(), Ok(&6));
    assert_eq!(shifted - cur, 2);
    assert_eq!(cur - shifted, -2, "Differences should be signed.");

    assert_eq!((shifted - 2).get(), Ok(&4));
}

#[test]
fn test_cursor_unchecked() {
    let arr = DynArray::from([7, 8, 9]);
    let mut cur = arr.cursor();

    // SAFETY: All offsets below stay within 0..=3 and reads happen at
    // positions < 3.
    unsafe {
        assert_eq!(cur.get_unchecked(), &7);
        cur.seek_unchecked(2);
        assert_eq!(cur.get_unchecked(), &9);
        cur.seek_unchecked(-1);
        assert_eq!(cur.get_unchecked(), &8);
    }
}

#[test]
fn test_cursor_mut() {
    let mut arr = DynArray::from([1, 2, 3, 4]);

    let mut cur = arr.cursor_mut();
    cur.try_seek(2).expect("slot 2 is in bounds");
    *cur.get_mut().expect("slot 2 is dereferenceable") *= 10;
    assert_eq!(cur.replace(300).expect("slot 2 is dereferenceable"), 30);

    cur.try_advance().expect("slot 3 is in bounds");
    // SAFETY: The cursor stands on slot 3 of a 4-element buffer.
    unsafe {
        *cur.get_unchecked_mut() = 400;
    }

    drop(cur);
    assert_eq!(&*arr, &[1, 2, 300, 400]);

    let mut unbound: CursorMut<'_, i32> = CursorMut::default();
    assert_eq!(unbound.get_mut(), Err(CursorUnbound.into()));
    assert_eq!(unbound.try_advance(), Err(CursorUnbound.into()));
}

#[test]
fn test_cursor_error_taxonomy() {
    let err: CursorError = CursorUnbound.into();
    assert!(err.is_unbound());
    assert_eq!(err.to_string(), "The cursor is not bound to a buffer!");

    let err: CursorError = IndexOutOfBounds { index: 5, len: 3 }.into();
    assert!(err.is_index_out_of_bounds());
    let inner: Result<IndexOutOfBounds, _> = err.try_into();
    assert_eq!(inner.ok(), Some(IndexOutOfBounds { index: 5, len: 3 }));
}
