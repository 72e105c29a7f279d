//! # reckon
//!
//! reckon evaluates arithmetic expressions written as text. It supports infix
//! operators (`+ - * / % ^`), the suffix factorial `!`, and function-style
//! operators (`sqrt log sin cos tan`), with operator precedence and
//! parentheses.
//!
//! Evaluation is a four-stage pipeline: the text is tokenized, the tokens are
//! validated, reordered into postfix order, and folded into a single `f64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Ties together every stage of expression evaluation.
///
/// This module holds the operator registry, the lexer, the validator, the
/// postfix converter, and the evaluator, plus the [`Calculator`] facade that
/// runs them in order.
///
/// # Responsibilities
/// - Defines tokens and operator descriptors.
/// - Converts text into tokens, tokens into postfix order, and postfix order
///   into a number.
/// - Reports syntax and evaluation errors with byte positions.
pub mod calculator;
/// Provides unified error types for tokenizing, conversion, and evaluation.
///
/// # Responsibilities
/// - Defines [`SyntaxError`](error::SyntaxError) for malformed input and
///   [`EvaluationError`](error::EvaluationError) for failed computations.
/// - Wraps both in [`CalcError`] for callers of the whole pipeline.
pub mod error;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Parses numeric literals into `f64`.
/// - Truncates `f64` values toward zero for integer-only operators.
pub mod util;

pub use calculator::{
    core::Calculator,
    operator::core::{Fixity, Operator, OperatorTable, Precedence},
};
pub use error::CalcError;

/// Evaluates an expression with the standard operators.
///
/// This is a shorthand for `Calculator::new().evaluate_expression(expression)`.
///
/// # Errors
/// Returns an error if the expression is malformed or cannot be evaluated.
///
/// # Examples
/// ```
/// use reckon::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2+2").unwrap(), 4.0);
/// assert_eq!(evaluate_expression("(1+2)*sqrt(4)-log(1)+3!*2^2").unwrap(), 30.0);
///
/// // Division by zero is an error, not infinity.
/// assert!(evaluate_expression("1/0").is_err());
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64, CalcError> {
    Calculator::new().evaluate_expression(expression)
}
