//! Backward rules for the differentiable unary operators.
//!
//! Each rule takes the forward input `x` and an upstream gradient `d` and
//! returns `f'(x) * d`, the local step of the chain rule. Rules are free
//! functions rather than methods so a graph node can hold a pointer to its
//! rule independently of how its forward value was produced.

use crate::error::OpError;
use crate::scalar::sigmoid;
use crate::Scalar;

/// Backward of [`id`](crate::scalar::id).
pub fn id_back(_x: Scalar, d: Scalar) -> Scalar {
    // z = x
    // dz/dx = 1
    d
}

/// Backward of [`neg`](crate::scalar::neg).
pub fn neg_back(_x: Scalar, d: Scalar) -> Scalar {
    // z = -x
    // dz/dx = -1
    -d
}

/// Backward of [`exp`](crate::scalar::exp).
pub fn exp_back(x: Scalar, d: Scalar) -> Scalar {
    // z = exp(x)
    // dz/dx = exp(x)
    x.exp() * d
}

/// Backward of [`sigmoid`].
pub fn sigmoid_back(x: Scalar, d: Scalar) -> Scalar {
    // z = sigmoid(x)
    // dz/dx = sigmoid(x) * (1 - sigmoid(x))
    let s = sigmoid(x);
    s * (1.0 - s) * d
}

/// Backward of [`relu`](crate::scalar::relu).
///
/// The derivative at the kink `x == 0` is taken to be 0.
pub fn relu_back(x: Scalar, d: Scalar) -> Scalar {
    if x > 0.0 {
        d
    } else {
        0.0
    }
}

/// Backward of [`log`](crate::scalar::log).
///
/// Fails with [`OpError::LogDomain`] wherever `log` itself is undefined.
pub fn log_back(x: Scalar, d: Scalar) -> Result<Scalar, OpError> {
    // z = ln(x)
    // dz/dx = 1/x
    if x > 0.0 {
        Ok(d / x)
    } else {
        Err(OpError::LogDomain { x })
    }
}

/// Backward of [`inv`](crate::scalar::inv).
pub fn inv_back(x: Scalar, d: Scalar) -> Result<Scalar, OpError> {
    // z = 1/x
    // dz/dx = -1/x^2
    if x == 0.0 {
        return Err(OpError::DivisionByZero { op: "inv_back" });
    }
    Ok(-d / (x * x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{inv, log, relu};

    /// Central difference of a fallible scalar function.
    fn numeric(f: impl Fn(f64) -> Result<f64, OpError>, x: f64) -> f64 {
        let h = 1e-6;
        (f(x + h).unwrap() - f(x - h).unwrap()) / (2.0 * h)
    }

    #[test]
    fn test_log_back_matches_finite_difference() {
        for x in [0.1, 0.5, 1.0, 2.0, 10.0] {
            let fd = numeric(log, x);
            let analytic = log_back(x, 1.0).unwrap();
            assert!(
                (fd - analytic).abs() < 1e-4,
                "log_back({}) = {}, fd = {}",
                x,
                analytic,
                fd
            );
        }
    }

    #[test]
    fn test_inv_back_matches_finite_difference() {
        for x in [-3.0, -0.5, 0.25, 1.0, 4.0] {
            let fd = numeric(inv, x);
            let analytic = inv_back(x, 1.0).unwrap();
            assert!((fd - analytic).abs() < 1e-4);
        }
    }

    #[test]
    fn test_relu_back_matches_finite_difference_away_from_kink() {
        for x in [-2.0, -0.1, 0.1, 3.0] {
            let fd = numeric(|v| Ok(relu(v)), x);
            assert!((fd - relu_back(x, 1.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_relu_back_kink() {
        assert_eq!(relu_back(0.0, 5.0), 0.0);
        assert_eq!(relu_back(1e-12, 5.0), 5.0);
        assert_eq!(relu_back(-1.0, 5.0), 0.0);
    }

    #[test]
    fn test_upstream_gradient_scales_result() {
        assert!((log_back(2.0, 3.0).unwrap() - 1.5).abs() < 1e-12);
        assert!((inv_back(2.0, 8.0).unwrap() - (-2.0)).abs() < 1e-12);
        assert!((exp_back(0.0, 4.0) - 4.0).abs() < 1e-12);
        assert!((sigmoid_back(0.0, 2.0) - 0.5).abs() < 1e-12);
        assert_eq!(neg_back(7.0, 2.0), -2.0);
        assert_eq!(id_back(7.0, 2.0), 2.0);
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(log_back(0.0, 1.0), Err(OpError::LogDomain { .. })));
        assert!(matches!(log_back(-1.0, 1.0), Err(OpError::LogDomain { .. })));
        assert_eq!(
            inv_back(0.0, 1.0),
            Err(OpError::DivisionByZero { op: "inv_back" })
        );
    }
}
