/// Combines all elements of a sequence into one result, folding left to right
/// from `init`.
///
/// # Examples
/// ```
/// # use seq_basics::numeric::reduce;
/// assert_eq!(reduce([1, 2, 3, 4, 5], 0, |acc, v| acc + v), 15);
/// assert_eq!(reduce("abc".chars(), String::new(), |mut s, c| { s.push(c); s }), "abc");
/// ```
pub fn reduce<I, A, F>(values: I, init: A, mut combine: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    let mut acc = init;
    for value in values {
        acc = combine(acc, value);
    }
    acc
}

/// Transforms pairs of elements drawn from two sequences, then reduces the
/// transformed values from `init`. Stops at the end of the shorter sequence.
///
/// The classic inner product is `transform = multiply`, `combine = add`:
///
/// # Examples
/// ```
/// # use seq_basics::numeric::inner_product;
/// let dot = inner_product(
///     [1, 2, 3],
///     [4, 5, 6],
///     0,
///     |acc, v| acc + v,
///     |a, b| a * b,
/// );
/// assert_eq!(dot, 32);
/// ```
pub fn inner_product<L, R, A, B, F, G>(
    lhs: L,
    rhs: R,
    init: A,
    mut combine: F,
    mut transform: G,
) -> A
where
    L: IntoIterator,
    R: IntoIterator,
    F: FnMut(A, B) -> A,
    G: FnMut(L::Item, R::Item) -> B,
{
    let mut acc = init;
    for (a, b) in lhs.into_iter().zip(rhs) {
        acc = combine(acc, transform(a, b));
    }
    acc
}
