use std::ops::Add;

use crate::collections::contiguous::DynArray;

/// Produces, for each position, the reduction of all elements up to and
/// including that position. An empty input produces an empty output.
///
/// The final element equals the full reduction of the input.
///
/// # Examples
/// ```
/// # use seq_basics::numeric::inclusive_scan;
/// let sums = inclusive_scan(&[1, 2, 3, 4, 5], |a, b| a + b);
/// assert_eq!(&*sums, &[1, 3, 6, 10, 15]);
/// ```
pub fn inclusive_scan<T, F>(values: &[T], mut combine: F) -> DynArray<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    let mut out = DynArray::new_uninit(values.len());

    let mut acc: Option<T> = None;
    for (slot, value) in out.iter_mut().zip(values) {
        let next = match acc.take() {
            None => value.clone(),
            Some(prev) => combine(&prev, value),
        };
        slot.write(next.clone());
        acc = Some(next);
    }

    // SAFETY: The zip above wrote one value into every slot; out and values
    // have the same length.
    unsafe { out.assume_init() }
}

/// Produces, for each position, the reduction of all elements *before* that
/// position, seeded with `init`. The last input element never contributes.
///
/// # Examples
/// ```
/// # use seq_basics::numeric::exclusive_scan;
/// let sums = exclusive_scan(&[1, 2, 3, 4, 5], 0, |a, b| a + b);
/// assert_eq!(&*sums, &[0, 1, 3, 6, 10]);
/// ```
pub fn exclusive_scan<T, F>(values: &[T], init: T, mut combine: F) -> DynArray<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    let mut out = DynArray::new_uninit(values.len());

    let mut acc = init;
    for (slot, value) in out.iter_mut().zip(values) {
        slot.write(acc.clone());
        acc = combine(&acc, value);
    }

    // SAFETY: The zip above wrote one value into every slot; out and values
    // have the same length.
    unsafe { out.assume_init() }
}

/// Combines every pair of consecutive elements: element 0 is copied through,
/// element `i` is `diff(&values[i], &values[i - 1])`.
///
/// With subtraction as `diff`, this inverts [`inclusive_scan`] by addition.
///
/// # Examples
/// ```
/// # use seq_basics::numeric::adjacent_difference;
/// let deltas = adjacent_difference(&[1, 3, 6, 10, 15], |a, b| a - b);
/// assert_eq!(&*deltas, &[1, 2, 3, 4, 5]);
/// ```
pub fn adjacent_difference<T, F>(values: &[T], mut diff: F) -> DynArray<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    let mut out = DynArray::new_uninit(values.len());

    for (i, slot) in out.iter_mut().enumerate() {
        let next = if i == 0 {
            values[0].clone()
        } else {
            diff(&values[i], &values[i - 1])
        };
        slot.write(next);
    }

    // SAFETY: The loop above wrote one value into every slot.
    unsafe { out.assume_init() }
}

/// Fills a new buffer with the arithmetic sequence starting at `start` and
/// increasing by `step`.
///
/// # Examples
/// ```
/// # use seq_basics::numeric::iota;
/// assert_eq!(&*iota(1, 1, 5), &[1, 2, 3, 4, 5]);
/// assert_eq!(&*iota(0.5, 0.25, 3), &[0.5, 0.75, 1.0]);
/// ```
pub fn iota<T>(start: T, step: T, count: usize) -> DynArray<T>
where
    T: Clone + Add<Output = T>,
{
    let mut out = DynArray::new_uninit(count);

    let mut next = start;
    for slot in out.iter_mut() {
        slot.write(next.clone());
        next = next + step.clone();
    }

    // SAFETY: The loop above wrote one value into every slot.
    unsafe { out.assume_init() }
}
