//! Scalar operators specialized over sequences.
//!
//! Each function here is a single combinator call, so it inherits that
//! combinator's length and ordering behavior exactly.

use ad_ops::{add, max_of, mul, neg, Scalar};

use crate::combinators::{map_seq, reduce_seq, zip_with_seq};

/// Negate every element.
pub fn negate_seq(seq: &[Scalar]) -> Vec<Scalar> {
    map_seq(neg, seq.iter().copied())
}

/// Elementwise sum, truncated to the shorter input.
pub fn add_seqs(seq1: &[Scalar], seq2: &[Scalar]) -> Vec<Scalar> {
    zip_with_seq(add, seq1.iter().copied(), seq2.iter().copied())
}

/// Sum of all elements; 0 for an empty sequence.
pub fn sum_seq(seq: &[Scalar]) -> Scalar {
    reduce_seq(add, seq.iter().copied(), 0.0)
}

/// Product of all elements; 1 for an empty sequence.
pub fn product_seq(seq: &[Scalar]) -> Scalar {
    reduce_seq(mul, seq.iter().copied(), 1.0)
}

/// Largest elementwise `|a - b|`, truncated to the shorter input; 0 for an
/// empty pair.
pub fn max_abs_error(seq1: &[Scalar], seq2: &[Scalar]) -> Scalar {
    let diffs = zip_with_seq(
        |a: Scalar, b: Scalar| (a - b).abs(),
        seq1.iter().copied(),
        seq2.iter().copied(),
    );
    reduce_seq(max_of, diffs, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_negate_seq() {
        assert_eq!(negate_seq(&[1.0, 2.0, 3.0]), vec![-1.0, -2.0, -3.0]);
        assert!(negate_seq(&[]).is_empty());
    }

    #[rstest]
    #[case(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![5.0, 7.0, 9.0])]
    #[case(vec![1.0, 2.0], vec![3.0, 4.0, 5.0], vec![4.0, 6.0])]
    #[case(vec![1.0, 2.0, 3.0], vec![], vec![])]
    fn test_add_seqs(#[case] a: Vec<f64>, #[case] b: Vec<f64>, #[case] expected: Vec<f64>) {
        assert_eq!(add_seqs(&a, &b), expected);
    }

    #[rstest]
    #[case(vec![1.0, 2.0, 3.0], 6.0)]
    #[case(vec![1.0, 2.0, 3.0, 4.0], 10.0)]
    #[case(vec![], 0.0)]
    fn test_sum_seq(#[case] seq: Vec<f64>, #[case] expected: f64) {
        assert_eq!(sum_seq(&seq), expected);
    }

    #[rstest]
    #[case(vec![1.0, 2.0, 3.0, 4.0], 24.0)]
    #[case(vec![2.0, -0.5], -1.0)]
    #[case(vec![], 1.0)]
    fn test_product_seq(#[case] seq: Vec<f64>, #[case] expected: f64) {
        assert_eq!(product_seq(&seq), expected);
    }

    #[test]
    fn test_derived_ops_match_general_combinators() {
        let a = [0.5, -1.5, 2.25, 8.0];
        let b = [1.0, 1.0, -3.0];
        assert_eq!(negate_seq(&a), map_seq(|x: f64| -x, a));
        assert_eq!(add_seqs(&a, &b), zip_with_seq(|x: f64, y: f64| x + y, a, b));
        assert_eq!(sum_seq(&a), reduce_seq(|acc: f64, x: f64| acc + x, a, 0.0));
        assert_eq!(product_seq(&a), reduce_seq(|acc: f64, x: f64| acc * x, a, 1.0));
    }

    #[rstest]
    #[case(vec![1.0, 2.0, 3.0], vec![1.1, 2.0, 2.8], 0.2)]
    #[case(vec![-1.0, 5.0], vec![1.0, 5.0], 2.0)]
    #[case(vec![1.0, 2.0], vec![1.0, 2.0, 100.0], 0.0)]
    #[case(vec![], vec![], 0.0)]
    fn test_max_abs_error(#[case] a: Vec<f64>, #[case] b: Vec<f64>, #[case] expected: f64) {
        assert!((max_abs_error(&a, &b) - expected).abs() < 1e-12);
    }
}
