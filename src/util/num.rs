use crate::error::{EvalResult, EvaluationError};

/// Parses a numeric literal as produced by the tokenizer.
///
/// Literals containing a `.` are read as floating-point numbers. Any other
/// literal is read as an `i64` and widened; a literal too large for `i64`
/// falls back to floating-point parsing instead of losing its value.
///
/// ## Errors
/// Returns [`EvaluationError::InvalidNumber`] if the text is not a number,
/// such as `1.2.3` or a lone `.`.
///
/// ## Parameters
/// - `literal`: The literal text, made of digits and decimal points.
/// - `at`: Byte offset of the literal, for error reporting.
///
/// ## Example
/// ```
/// use reckon::{error::EvaluationError, util::num::parse_literal};
///
/// assert_eq!(parse_literal("42", 0).unwrap(), 42.0);
/// assert_eq!(parse_literal("2.5", 0).unwrap(), 2.5);
/// assert_eq!(parse_literal(".5", 0).unwrap(), 0.5);
///
/// // Too large for i64, still read as a float.
/// assert_eq!(parse_literal("100000000000000000000", 0).unwrap(), 1e20);
///
/// let err = parse_literal("1.2.3", 7).unwrap_err();
/// assert!(matches!(err, EvaluationError::InvalidNumber { at: 7, .. }));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn parse_literal(literal: &str, at: usize) -> EvalResult<f64> {
    let invalid = || EvaluationError::InvalidNumber { literal: literal.to_string(),
                                                      at };

    if literal.contains('.') {
        return literal.parse::<f64>().map_err(|_| invalid());
    }

    match literal.parse::<i64>() {
        Ok(value) => Ok(value as f64),
        Err(_) => literal.parse::<f64>().map_err(|_| invalid()),
    }
}

/// Truncates a floating-point value toward zero.
///
/// Values outside the `i64` range saturate at its bounds and `NaN` becomes
/// zero.
///
/// ## Example
/// ```
/// use reckon::util::num::truncate_toward_zero;
///
/// assert_eq!(truncate_toward_zero(3.9), 3);
/// assert_eq!(truncate_toward_zero(-3.9), -3);
/// assert_eq!(truncate_toward_zero(f64::NAN), 0);
/// assert_eq!(truncate_toward_zero(f64::INFINITY), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn truncate_toward_zero(value: f64) -> i64 {
    value.trunc() as i64
}
