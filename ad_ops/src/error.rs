//! Error type for operators that are only defined on part of the real line.
//!
//! Forward operators and backward rules fail at points outside their domain
//! instead of producing `NaN` or `inf`. A backward rule is only meaningful
//! where its forward function is defined, so both sides report the same error.

use thiserror::Error;

use crate::Scalar;

/// Errors raised by the scalar operator set.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OpError {
    /// Natural log (or its derivative) evaluated at a non-positive input.
    #[error("log is undefined for non-positive input {x}")]
    LogDomain { x: Scalar },

    /// Reciprocal (or its derivative) evaluated at zero.
    #[error("division by zero in {op}")]
    DivisionByZero { op: &'static str },

    /// No differentiable operator is registered under this name.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
}

impl OpError {
    /// True for errors caused by evaluating outside an operator's domain.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, OpError::LogDomain { .. } | OpError::DivisionByZero { .. })
    }
}
