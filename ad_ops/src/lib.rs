//! # ad_ops - Scalar Operators and Backward Rules
//!
//! This crate provides the elementary scalar functions that a reverse-mode
//! autodiff engine is built from, each differentiable one paired with a
//! backward rule implementing its step of the chain rule.
//!
//! ## Overview
//!
//! A backward rule takes the forward input `x` and an upstream gradient `d`
//! and returns `f'(x) * d`. Composing these local steps from the output back
//! to the inputs is exactly backpropagation; this crate supplies the steps,
//! not the graph.
//!
//! ## Quick Start
//!
//! ```
//! use ad_ops::{log, log_back, sigmoid, UnaryOp};
//!
//! // Forward values
//! assert_eq!(sigmoid(0.0), 0.5);
//! assert!((log(1.0).unwrap()).abs() < 1e-12);
//!
//! // d/dx ln(x) at x = 2, scaled by an upstream gradient of 3
//! assert!((log_back(2.0, 3.0).unwrap() - 1.5).abs() < 1e-12);
//!
//! // The same rule, looked up by operator identity
//! let op: UnaryOp = "log".parse().unwrap();
//! assert_eq!(op.backward(2.0, 3.0), log_back(2.0, 3.0));
//!
//! // Outside the domain the operator fails instead of returning NaN
//! assert!(log(0.0).is_err());
//! ```
//!
//! ## Supported Operations
//!
//! | Category | Operations |
//! |----------|------------|
//! | Arithmetic | [`mul`], [`add`], [`neg`], [`id`] |
//! | Comparison | [`lt`], [`eq`], [`max_of`], [`is_close`] |
//! | Activation | [`sigmoid`], [`relu`] |
//! | Transcendental | [`log`], [`exp`], [`inv`] |
//! | Backward | [`id_back`], [`neg_back`], [`sigmoid_back`], [`relu_back`], [`log_back`], [`exp_back`], [`inv_back`] |
//!
//! ## Architecture
//!
//! - **[`UnaryOp`]**: Differentiable operator identity; [`UnaryOp::rule`] yields its forward/backward pair.
//! - **[`OpError`]**: Domain errors raised by partial operators.
//! - **[`check_rule`]**: Utility for validating a backward rule against numerical derivatives.

mod backward;
mod error;
mod finite_diff;
mod scalar;
mod table;

pub use backward::{exp_back, id_back, inv_back, log_back, neg_back, relu_back, sigmoid_back};
pub use error::OpError;
pub use finite_diff::{central_difference, check_rule, GradCheck};
pub use scalar::{
    add, eq, exp, id, inv, is_close, log, lt, max_of, mul, neg, relu, sigmoid, CLOSE_TOLERANCE,
};
pub use table::{BackwardFn, Rule, UnaryFn, UnaryOp};

/// A single real number, the unit of computation.
pub type Scalar = f64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_rule_composition() {
        // z = log(sigmoid(x))
        // dz/dx = (1 / sigmoid(x)) * sigmoid(x) * (1 - sigmoid(x)) = 1 - sigmoid(x)
        let x = 0.8;
        let s = sigmoid(x);
        let d_s = log_back(s, 1.0).unwrap();
        let d_x = sigmoid_back(x, d_s);
        assert!((d_x - (1.0 - s)).abs() < 1e-10);
    }

    #[test]
    fn test_chain_rule_through_table() {
        // z = inv(exp(x)) = exp(-x)
        // dz/dx = -exp(-x)
        let x = 1.3;
        let ops = [UnaryOp::Exp, UnaryOp::Inv];

        let mut inputs = Vec::new();
        let mut value = x;
        for op in ops {
            inputs.push(value);
            value = op.forward(value).unwrap();
        }
        assert!((value - (-x).exp()).abs() < 1e-12);

        let mut grad = 1.0;
        for (op, input) in ops.iter().zip(inputs.iter()).rev() {
            grad = op.backward(*input, grad).unwrap();
        }
        assert!((grad - (-(-x).exp())).abs() < 1e-10);

        let fd = central_difference(|v| inv(exp(v)), x, 1e-7).unwrap();
        assert!((grad - fd).abs() < 1e-5);
    }

    #[test]
    fn test_backward_at_undefined_point_fails() {
        // The forward pass fails first, so the backward rule is never reached
        // with an invalid input.
        let x = -2.0;
        assert!(log(x).is_err());
        assert!(log_back(x, 1.0).is_err());
        assert!(inv(0.0).is_err());
        assert!(inv_back(0.0, 1.0).is_err());
    }
}
