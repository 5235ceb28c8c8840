//! Python bindings for the scalar operators and sequence combinators.
//!
//! Exposes each operator under its conventional Python name, and the
//! combinators as functions accepting Python callables.

use pyo3::exceptions::{PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

use ad_functional::{self as functional, try_map_seq, try_reduce_seq, try_zip_with_seq};
use ad_ops::{self as ops, OpError, UnaryOp};

/// Map a domain error onto the matching Python exception.
fn to_py_err(err: OpError) -> PyErr {
    match err {
        OpError::DivisionByZero { .. } => PyZeroDivisionError::new_err(err.to_string()),
        OpError::LogDomain { .. } | OpError::UnknownOperator(_) => {
            PyValueError::new_err(err.to_string())
        }
    }
}

// === Scalar operators ===

/// Multiplies two numbers.
#[pyfunction]
fn mul(x: f64, y: f64) -> f64 {
    ops::mul(x, y)
}

/// Returns the input unchanged.
#[pyfunction]
#[pyo3(name = "id")]
fn identity(x: f64) -> f64 {
    ops::id(x)
}

/// Adds two numbers.
#[pyfunction]
fn add(x: f64, y: f64) -> f64 {
    ops::add(x, y)
}

/// Negates a number.
#[pyfunction]
fn neg(x: f64) -> f64 {
    ops::neg(x)
}

/// True if x is strictly less than y.
#[pyfunction]
fn lt(x: f64, y: f64) -> bool {
    ops::lt(x, y)
}

/// True if x equals y exactly.
#[pyfunction]
fn eq(x: f64, y: f64) -> bool {
    ops::eq(x, y)
}

/// The larger of x and y; y on ties.
#[pyfunction]
#[pyo3(name = "max")]
fn max_of(x: f64, y: f64) -> f64 {
    ops::max_of(x, y)
}

/// True if |x - y| < 1e-2.
#[pyfunction]
fn is_close(x: f64, y: f64) -> bool {
    ops::is_close(x, y)
}

/// Numerically stable logistic sigmoid.
#[pyfunction]
fn sigmoid(x: f64) -> f64 {
    ops::sigmoid(x)
}

/// max(x, 0)
#[pyfunction]
fn relu(x: f64) -> f64 {
    ops::relu(x)
}

/// Natural logarithm.
///
/// Raises:
///     ValueError: if x <= 0
#[pyfunction]
fn log(x: f64) -> PyResult<f64> {
    ops::log(x).map_err(to_py_err)
}

/// e ** x
#[pyfunction]
fn exp(x: f64) -> f64 {
    ops::exp(x)
}

/// 1 / x
///
/// Raises:
///     ZeroDivisionError: if x == 0
#[pyfunction]
fn inv(x: f64) -> PyResult<f64> {
    ops::inv(x).map_err(to_py_err)
}

/// Derivative of log at x, times d.
#[pyfunction]
fn log_back(x: f64, d: f64) -> PyResult<f64> {
    ops::log_back(x, d).map_err(to_py_err)
}

/// Derivative of inv at x, times d.
#[pyfunction]
fn inv_back(x: f64, d: f64) -> PyResult<f64> {
    ops::inv_back(x, d).map_err(to_py_err)
}

/// Derivative of relu at x, times d.
#[pyfunction]
fn relu_back(x: f64, d: f64) -> f64 {
    ops::relu_back(x, d)
}

/// Backward rule of a named unary operator.
///
/// Example:
///     >>> backward("sigmoid", 0.0, 1.0)
///     0.25
#[pyfunction]
fn backward(op: &str, x: f64, d: f64) -> PyResult<f64> {
    let op: UnaryOp = op.parse().map_err(to_py_err)?;
    op.backward(x, d).map_err(to_py_err)
}

// === Combinators ===

fn call_unary(f: &Bound<'_, PyAny>, x: f64) -> PyResult<f64> {
    f.call1((x,))?.extract()
}

fn call_binary(f: &Bound<'_, PyAny>, x: f64, y: f64) -> PyResult<f64> {
    f.call1((x, y))?.extract()
}

/// Apply f to each element.
///
/// Example:
///     >>> map(neg, [1.0, 2.0, 3.0])
///     [-1.0, -2.0, -3.0]
#[pyfunction]
fn map(f: &Bound<'_, PyAny>, xs: Vec<f64>) -> PyResult<Vec<f64>> {
    try_map_seq(|x| call_unary(f, x), xs)
}

/// Combine corresponding elements with f, truncating to the shorter list.
///
/// Example:
///     >>> zipWith(add, [1.0, 2.0], [3.0, 4.0, 5.0])
///     [4.0, 6.0]
#[pyfunction]
#[pyo3(name = "zipWith")]
fn zip_with(f: &Bound<'_, PyAny>, xs: Vec<f64>, ys: Vec<f64>) -> PyResult<Vec<f64>> {
    try_zip_with_seq(|x, y| call_binary(f, x, y), xs, ys)
}

/// Left fold of f over xs starting from value.
///
/// Example:
///     >>> reduce(add, [1.0, 2.0, 3.0, 4.0], 0.0)
///     10.0
#[pyfunction]
fn reduce(f: &Bound<'_, PyAny>, xs: Vec<f64>, value: f64) -> PyResult<f64> {
    try_reduce_seq(|acc, x| call_binary(f, acc, x), xs, value)
}

/// Negate each element.
#[pyfunction]
#[pyo3(name = "negList")]
fn neg_list(xs: Vec<f64>) -> Vec<f64> {
    functional::negate_seq(&xs)
}

/// Add corresponding elements of two lists.
#[pyfunction]
#[pyo3(name = "addLists")]
fn add_lists(xs: Vec<f64>, ys: Vec<f64>) -> Vec<f64> {
    functional::add_seqs(&xs, &ys)
}

/// Sum of a list; 0.0 when empty.
#[pyfunction]
fn sum(xs: Vec<f64>) -> f64 {
    functional::sum_seq(&xs)
}

/// Product of a list; 1.0 when empty.
#[pyfunction]
fn prod(xs: Vec<f64>) -> f64 {
    functional::product_seq(&xs)
}

/// Python module for scalar operators and their backward rules.
#[pymodule]
fn ad_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mul, m)?)?;
    m.add_function(wrap_pyfunction!(identity, m)?)?;
    m.add_function(wrap_pyfunction!(add, m)?)?;
    m.add_function(wrap_pyfunction!(neg, m)?)?;
    m.add_function(wrap_pyfunction!(lt, m)?)?;
    m.add_function(wrap_pyfunction!(eq, m)?)?;
    m.add_function(wrap_pyfunction!(max_of, m)?)?;
    m.add_function(wrap_pyfunction!(is_close, m)?)?;
    m.add_function(wrap_pyfunction!(sigmoid, m)?)?;
    m.add_function(wrap_pyfunction!(relu, m)?)?;
    m.add_function(wrap_pyfunction!(log, m)?)?;
    m.add_function(wrap_pyfunction!(exp, m)?)?;
    m.add_function(wrap_pyfunction!(inv, m)?)?;
    m.add_function(wrap_pyfunction!(log_back, m)?)?;
    m.add_function(wrap_pyfunction!(inv_back, m)?)?;
    m.add_function(wrap_pyfunction!(relu_back, m)?)?;
    m.add_function(wrap_pyfunction!(backward, m)?)?;

    m.add_function(wrap_pyfunction!(map, m)?)?;
    m.add_function(wrap_pyfunction!(zip_with, m)?)?;
    m.add_function(wrap_pyfunction!(reduce, m)?)?;
    m.add_function(wrap_pyfunction!(neg_list, m)?)?;
    m.add_function(wrap_pyfunction!(add_lists, m)?)?;
    m.add_function(wrap_pyfunction!(sum, m)?)?;
    m.add_function(wrap_pyfunction!(prod, m)?)?;
    Ok(())
}
