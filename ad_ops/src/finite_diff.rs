//! Finite difference utilities for backward-rule verification.
//!
//! Provides numerical derivatives for checking that each backward rule
//! agrees with the derivative of its forward function.

use crate::error::OpError;
use crate::table::UnaryOp;
use crate::Scalar;

/// Compute a derivative using a central finite difference.
///
/// # Arguments
/// * `f` - Scalar function, possibly partial
/// * `x` - The point at which to differentiate
/// * `eps` - Step size (typically 1e-7 to 1e-5)
///
/// Any error `f` raises at `x + eps` or `x - eps` is returned unchanged.
///
/// # Example
/// ```
/// use ad_ops::central_difference;
///
/// // f(x) = x^2, df/dx = 2x
/// let d = central_difference(|x| Ok(x * x), 3.0, 1e-7).unwrap();
/// assert!((d - 6.0).abs() < 1e-5);
/// ```
pub fn central_difference<F>(f: F, x: Scalar, eps: Scalar) -> Result<Scalar, OpError>
where
    F: Fn(Scalar) -> Result<Scalar, OpError>,
{
    let f_plus = f(x + eps)?;
    let f_minus = f(x - eps)?;
    Ok((f_plus - f_minus) / (2.0 * eps))
}

/// Largest step, as a fraction of `|x|`, used for operators with a pole or
/// domain boundary at zero.
const BOUNDARY_STEP_FRACTION: Scalar = 1e-3;

/// Outcome of comparing one backward rule against a numerical derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheck {
    pub op: UnaryOp,
    pub x: Scalar,
    /// Step actually used for the central difference.
    pub step: Scalar,
    /// `op.backward(x, 1.0)`
    pub analytic: Scalar,
    /// Central difference of `op.forward` at `x`.
    pub numeric: Scalar,
}

impl GradCheck {
    pub fn abs_error(&self) -> Scalar {
        (self.analytic - self.numeric).abs()
    }

    /// True if the error is below `tol`, scaled by `|analytic|` once the
    /// derivative exceeds 1 in magnitude.
    pub fn passes(&self, tol: Scalar) -> bool {
        self.abs_error() < tol * self.analytic.abs().max(1.0)
    }
}

/// Central-difference step for `op` at `x`.
///
/// `log` and `inv` are only defined on one side of zero, so their stencil
/// must not reach across it: the step shrinks with `|x|` near the boundary.
fn stencil_step(op: UnaryOp, x: Scalar, eps: Scalar) -> Scalar {
    match op {
        UnaryOp::Log | UnaryOp::Inv => eps.min(x.abs() * BOUNDARY_STEP_FRACTION),
        _ => eps,
    }
}

/// Check `op`'s backward rule at `x` against a central difference.
///
/// Fails only if `x` lies outside the operator's domain; points close to a
/// domain boundary are sampled with a smaller step.
pub fn check_rule(op: UnaryOp, x: Scalar, eps: Scalar) -> Result<GradCheck, OpError> {
    let rule = op.rule();
    let analytic = (rule.backward)(x, 1.0)?;
    let step = stencil_step(op, x, eps);
    let numeric = central_difference(rule.forward, x, step)?;

    let check = GradCheck {
        op,
        x,
        step,
        analytic,
        numeric,
    };
    log::debug!(
        "{} at x={} (step {:e}): analytic={}, numeric={}, error={:.2e}",
        op,
        x,
        step,
        analytic,
        numeric,
        check.abs_error()
    );
    Ok(check)
}
