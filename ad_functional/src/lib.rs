//! # ad_functional - Sequence Combinators for Scalar Operators
//!
//! This crate provides the higher-order vocabulary for lifting the scalar
//! operators of [`ad_ops`] over ordered sequences:
//!
//! - **Combinators**: [`map_seq`], [`zip_with_seq`], [`reduce_seq`] and their
//!   fallible `try_*` forms
//! - **Sequence ops**: [`negate_seq`], [`add_seqs`], [`sum_seq`], [`product_seq`],
//!   [`max_abs_error`]
//! - **Lifting**: [`map_op`], [`map_op_back`] apply a [`UnaryOp`](ad_ops::UnaryOp)
//!   and its backward rule elementwise
//!
//! Combinators only ever call the functions they are given. They accept any
//! `IntoIterator`, so nested containers are handled by nesting calls.
//!
//! ## Example
//!
//! ```
//! use ad_functional::{map_op, map_op_back, reduce_seq, sum_seq, zip_with_seq};
//! use ad_ops::{mul, UnaryOp};
//!
//! assert_eq!(sum_seq(&[1.0, 2.0, 3.0]), 6.0);
//!
//! // Mismatched lengths truncate to the shorter sequence
//! assert_eq!(zip_with_seq(mul, [1.0, 2.0], [3.0, 4.0, 5.0]), vec![3.0, 8.0]);
//!
//! // Left fold: ((1 - 2) - 3)
//! assert_eq!(reduce_seq(|a: f64, b: f64| a - b, [2.0, 3.0], 1.0), -4.0);
//!
//! // Forward and backward of exp over a sequence
//! let xs = [0.0, 1.0];
//! let ys = map_op(UnaryOp::Exp, &xs).unwrap();
//! let dxs = map_op_back(UnaryOp::Exp, &xs, &[1.0, 1.0]).unwrap();
//! assert_eq!(ys, dxs);
//!
//! // A single bad element aborts the whole call
//! assert!(map_op(UnaryOp::Log, &[1.0, -1.0]).is_err());
//! ```

pub mod combinators;
pub mod lift;
pub mod sequence;

pub use combinators::{
    map_seq, reduce_seq, try_map_seq, try_reduce_seq, try_zip_with_seq, zip_with_seq,
};
pub use lift::{map_op, map_op_back};
pub use sequence::{add_seqs, max_abs_error, negate_seq, product_seq, sum_seq};
