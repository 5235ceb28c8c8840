//! Forward scalar operators.
//!
//! Every function here is pure. The two partial functions, [`log`] and
//! [`inv`], return an [`OpError`] outside their domain; the rest are total
//! over `f64` and follow IEEE-754 semantics.

use crate::error::OpError;
use crate::Scalar;

/// Absolute tolerance used by [`is_close`].
pub const CLOSE_TOLERANCE: Scalar = 1e-2;

/// Multiplication: x * y
pub fn mul(x: Scalar, y: Scalar) -> Scalar {
    x * y
}

/// Identity: x
pub fn id(x: Scalar) -> Scalar {
    x
}

/// Addition: x + y
pub fn add(x: Scalar, y: Scalar) -> Scalar {
    x + y
}

/// Negation: -x
pub fn neg(x: Scalar) -> Scalar {
    -x
}

/// Strict ordering: x < y
pub fn lt(x: Scalar, y: Scalar) -> bool {
    x < y
}

/// Exact float equality: x == y
///
/// Use [`is_close`] for a tolerance-based comparison.
#[allow(clippy::float_cmp)]
pub fn eq(x: Scalar, y: Scalar) -> bool {
    x == y
}

/// The larger of `x` and `y`.
///
/// Ties (and any comparison involving NaN) return `y`.
pub fn max_of(x: Scalar, y: Scalar) -> Scalar {
    if x > y {
        x
    } else {
        y
    }
}

/// Approximate equality: |x - y| < 1e-2
pub fn is_close(x: Scalar, y: Scalar) -> bool {
    (x - y).abs() < CLOSE_TOLERANCE
}

/// Logistic sigmoid: 1 / (1 + e^(-x))
///
/// Negative inputs use the equivalent form e^x / (1 + e^x) so that `exp`
/// never sees a large positive argument. The result stays finite for any
/// finite input.
pub fn sigmoid(x: Scalar) -> Scalar {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// ReLU: max(x, 0)
pub fn relu(x: Scalar) -> Scalar {
    if x >= 0.0 {
        x
    } else {
        0.0
    }
}

/// Natural logarithm: ln(x)
///
/// Fails with [`OpError::LogDomain`] for `x <= 0` and for NaN.
pub fn log(x: Scalar) -> Result<Scalar, OpError> {
    if x > 0.0 {
        Ok(x.ln())
    } else {
        Err(OpError::LogDomain { x })
    }
}

/// Exponential: e^x
pub fn exp(x: Scalar) -> Scalar {
    x.exp()
}

/// Reciprocal: 1 / x
///
/// Fails with [`OpError::DivisionByZero`] at `x == 0` (either sign).
pub fn inv(x: Scalar) -> Result<Scalar, OpError> {
    if x == 0.0 {
        return Err(OpError::DivisionByZero { op: "inv" });
    }
    Ok(1.0 / x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rstest::rstest;

    #[test]
    fn test_identity_laws() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x: f64 = rng.gen_range(-1e3..1e3);
            assert_eq!(mul(x, 1.0), x);
            assert_eq!(add(x, 0.0), x);
            assert_eq!(id(x), x);
        }
    }

    #[test]
    fn test_negation_involution() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x: f64 = rng.gen_range(-1e3..1e3);
            assert_eq!(neg(neg(x)), x);
        }
        assert_eq!(neg(3.5), -3.5);
    }

    #[test]
    fn test_comparisons() {
        assert!(lt(1.0, 2.0));
        assert!(!lt(2.0, 1.0));
        assert!(!lt(2.0, 2.0));

        assert!(eq(2.0, 2.0));
        assert!(!eq(2.0, 2.0 + 1e-12));
    }

    #[rstest]
    #[case(1.0, 2.0, 2.0)]
    #[case(3.0, -1.0, 3.0)]
    #[case(-4.0, -5.0, -4.0)]
    #[case(2.0, 2.0, 2.0)]
    fn test_max_of(#[case] x: f64, #[case] y: f64, #[case] expected: f64) {
        assert_eq!(max_of(x, y), expected);
    }

    #[test]
    fn test_max_of_tie_returns_second_argument() {
        // 0.0 == -0.0, so the tie-break is observable through the sign bit.
        assert!(max_of(0.0, -0.0).is_sign_negative());
        assert!(max_of(-0.0, 0.0).is_sign_positive());
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-7.25)]
    #[case(100.0)]
    fn test_is_close_vs_equal(#[case] x: f64) {
        assert!(is_close(x, x + 0.005));
        assert!(!eq(x, x + 0.005));
        assert!(!is_close(x, x + 0.02));
    }

    #[test]
    fn test_sigmoid_values() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(1.0) - 1.0 / (1.0 + (-1.0f64).exp())).abs() < 1e-12);
        assert!((sigmoid(-2.0) - 1.0 / (1.0 + 2.0f64.exp())).abs() < 1e-12);
    }

    #[test]
    fn test_sigmoid_bounds_and_symmetry() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let x: f64 = rng.gen_range(-30.0..30.0);
            let s = sigmoid(x);
            assert!(s > 0.0 && s < 1.0, "sigmoid({}) = {} out of (0, 1)", x, s);
            assert!((s + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sigmoid_extreme_inputs() {
        for x in [-1e4, -745.0, -100.0, 100.0, 745.0, 1e4] {
            let s = sigmoid(x);
            assert!(s.is_finite(), "sigmoid({}) is not finite", x);
            assert!((0.0..=1.0).contains(&s));
        }
        assert_eq!(sigmoid(-1e4), 0.0);
        assert_eq!(sigmoid(1e4), 1.0);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(2.5, 2.5)]
    #[case(1e-9, 1e-9)]
    #[case(-1e-9, 0.0)]
    #[case(-3.0, 0.0)]
    fn test_relu(#[case] x: f64, #[case] expected: f64) {
        assert_eq!(relu(x), expected);
    }

    #[test]
    fn test_log_and_exp() {
        assert!((log(1.0).unwrap()).abs() < 1e-12);
        assert!((log(std::f64::consts::E).unwrap() - 1.0).abs() < 1e-12);
        assert!((exp(0.0) - 1.0).abs() < 1e-12);
        assert!((log(exp(2.5)).unwrap() - 2.5).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn test_log_domain_error(#[case] x: f64) {
        assert!(matches!(log(x), Err(OpError::LogDomain { .. })));
    }

    #[test]
    fn test_inv() {
        assert_eq!(inv(4.0).unwrap(), 0.25);
        assert_eq!(inv(-0.5).unwrap(), -2.0);
        assert_eq!(inv(0.0), Err(OpError::DivisionByZero { op: "inv" }));
        assert_eq!(inv(-0.0), Err(OpError::DivisionByZero { op: "inv" }));
    }
}
