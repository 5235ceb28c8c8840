//! Forward/backward pairing for the differentiable unary operators.
//!
//! [`UnaryOp`] names each operator that participates in gradient computation.
//! Its [`Rule`] holds exactly one forward function and the backward rule that
//! belongs to it, so a caller can recover the backward rule from the operator
//! identity alone.

use std::fmt;
use std::str::FromStr;

use crate::backward::{exp_back, id_back, inv_back, log_back, neg_back, relu_back, sigmoid_back};
use crate::error::OpError;
use crate::scalar::{exp, id, inv, log, neg, relu, sigmoid};
use crate::Scalar;

/// Forward function of a unary operator.
pub type UnaryFn = fn(Scalar) -> Result<Scalar, OpError>;

/// Backward rule: `(x, upstream) -> f'(x) * upstream`.
pub type BackwardFn = fn(Scalar, Scalar) -> Result<Scalar, OpError>;

/// A forward function together with its chain-rule backward.
#[derive(Clone, Copy)]
pub struct Rule {
    pub forward: UnaryFn,
    pub backward: BackwardFn,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}

/// Differentiable unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Identity,
    Negate,
    Sigmoid,
    Relu,
    Log,
    Exp,
    Inv,
}

impl UnaryOp {
    /// Every operator, in declaration order.
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Identity,
        UnaryOp::Negate,
        UnaryOp::Sigmoid,
        UnaryOp::Relu,
        UnaryOp::Log,
        UnaryOp::Exp,
        UnaryOp::Inv,
    ];

    /// Canonical lowercase name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Identity => "id",
            UnaryOp::Negate => "neg",
            UnaryOp::Sigmoid => "sigmoid",
            UnaryOp::Relu => "relu",
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
            UnaryOp::Inv => "inv",
        }
    }

    /// The forward/backward pair for this operator.
    pub fn rule(self) -> Rule {
        match self {
            UnaryOp::Identity => Rule {
                forward: |x| Ok(id(x)),
                backward: |x, d| Ok(id_back(x, d)),
            },
            UnaryOp::Negate => Rule {
                forward: |x| Ok(neg(x)),
                backward: |x, d| Ok(neg_back(x, d)),
            },
            UnaryOp::Sigmoid => Rule {
                forward: |x| Ok(sigmoid(x)),
                backward: |x, d| Ok(sigmoid_back(x, d)),
            },
            UnaryOp::Relu => Rule {
                forward: |x| Ok(relu(x)),
                backward: |x, d| Ok(relu_back(x, d)),
            },
            UnaryOp::Log => Rule {
                forward: log,
                backward: log_back,
            },
            UnaryOp::Exp => Rule {
                forward: |x| Ok(exp(x)),
                backward: |x, d| Ok(exp_back(x, d)),
            },
            UnaryOp::Inv => Rule {
                forward: inv,
                backward: inv_back,
            },
        }
    }

    /// Evaluate the forward function at `x`.
    pub fn forward(self, x: Scalar) -> Result<Scalar, OpError> {
        (self.rule().forward)(x)
    }

    /// Evaluate the backward rule at `x` with upstream gradient `d`.
    pub fn backward(self, x: Scalar, d: Scalar) -> Result<Scalar, OpError> {
        (self.rule().backward)(x, d)
    }

    /// False where the backward rule returns a subgradient (the ReLU kink).
    pub fn is_smooth_at(self, x: Scalar) -> bool {
        !(self == UnaryOp::Relu && x == 0.0)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryOp {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        UnaryOp::ALL
            .iter()
            .copied()
            .find(|op| op.name() == name)
            .ok_or_else(|| {
                log::debug!("no operator registered as {:?}", s);
                OpError::UnknownOperator(s.to_string())
            })
    }
}
