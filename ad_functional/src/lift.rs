//! Lifting differentiable unary operators over sequences.
//!
//! `map_op_back` is the elementwise chain rule: given the forward inputs and
//! the upstream gradient of each output, it returns the gradient of each input.

use ad_ops::{OpError, Scalar, UnaryOp};

use crate::combinators::{try_map_seq, try_zip_with_seq};

/// Apply `op` elementwise. Fails on the first element outside its domain.
pub fn map_op(op: UnaryOp, seq: &[Scalar]) -> Result<Vec<Scalar>, OpError> {
    let forward = op.rule().forward;
    try_map_seq(forward, seq.iter().copied())
}

/// Apply `op`'s backward rule elementwise to `(xs[i], upstream[i])`.
///
/// Pairs follow the combinator truncation policy.
pub fn map_op_back(
    op: UnaryOp,
    xs: &[Scalar],
    upstream: &[Scalar],
) -> Result<Vec<Scalar>, OpError> {
    if xs.len() != upstream.len() {
        log::debug!(
            "{} backward over {} inputs with {} upstream gradients; truncating",
            op,
            xs.len(),
            upstream.len()
        );
    }
    let backward = op.rule().backward;
    try_zip_with_seq(backward, xs.iter().copied(), upstream.iter().copied())
}
