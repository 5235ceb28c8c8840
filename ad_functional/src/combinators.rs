//! Generic higher-order combinators.
//!
//! The fallible `try_*` forms are the primitives: each stops at the first
//! element whose function call fails and returns that error unchanged. The
//! infallible forms run the same code with an uninhabited error type, so both
//! share one truncation policy and one fold order.

use std::convert::Infallible;

fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Apply `f` to every element, stopping at the first error.
pub fn try_map_seq<T, U, E, I, F>(f: F, seq: I) -> Result<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Result<U, E>,
{
    seq.into_iter().map(f).collect()
}

/// Combine corresponding elements of two sequences, stopping at the first error.
///
/// The result has the length of the shorter input; trailing elements of the
/// longer one are never passed to `f`.
pub fn try_zip_with_seq<A, B, V, E, I, J, F>(mut f: F, seq1: I, seq2: J) -> Result<Vec<V>, E>
where
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
    F: FnMut(A, B) -> Result<V, E>,
{
    seq1.into_iter().zip(seq2).map(|(a, b)| f(a, b)).collect()
}

/// Left fold starting from `init`, stopping at the first error.
pub fn try_reduce_seq<T, A, E, I, F>(f: F, seq: I, init: A) -> Result<A, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> Result<A, E>,
{
    seq.into_iter().try_fold(init, f)
}

/// Apply `f` to every element: `out[i] = f(seq[i])`.
///
/// ```
/// use ad_functional::map_seq;
///
/// assert_eq!(map_seq(|x: f64| -x, [1.0, 2.0, 3.0]), vec![-1.0, -2.0, -3.0]);
/// ```
pub fn map_seq<T, U, I, F>(mut f: F, seq: I) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> U,
{
    into_ok(try_map_seq(|x| Ok(f(x)), seq))
}

/// Combine corresponding elements: `out[i] = f(seq1[i], seq2[i])`.
///
/// Truncates to the shorter sequence.
pub fn zip_with_seq<A, B, V, I, J, F>(mut f: F, seq1: I, seq2: J) -> Vec<V>
where
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
    F: FnMut(A, B) -> V,
{
    into_ok(try_zip_with_seq(|a, b| Ok(f(a, b)), seq1, seq2))
}

/// Left fold: `f(...f(f(init, seq[0]), seq[1])..., seq[n-1])`.
///
/// Returns `init` for an empty sequence.
pub fn reduce_seq<T, A, I, F>(mut f: F, seq: I, init: A) -> A
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> A,
{
    into_ok(try_reduce_seq(|acc, x| Ok(f(acc, x)), seq, init))
}
