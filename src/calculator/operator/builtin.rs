use crate::{
    error::{EvalResult, EvaluationError},
    util::num::truncate_toward_zero,
};

/// Defines an infix operator behavior that cannot fail.
///
/// The generated function applies `$op` to the left and right operands.
macro_rules! infix_builtin {
    ($fname:ident, $op:tt) => {
        pub fn $fname(left: f64, right: f64, _at: usize) -> EvalResult<f64> {
            Ok(left $op right)
        }
    };
}

/// Defines a function-style operator behavior from an `f64` method.
///
/// The generated function applies `f64::$real_fn` to the left operand and
/// ignores the right one.
///
/// # Example
/// ```
/// use reckon::calculator::operator::builtin::sin;
///
/// let r = sin(std::f64::consts::PI / 2.0, 0.0, 0).unwrap();
/// assert_eq!(r, 1.0);
/// ```
macro_rules! function_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(value: f64, _right: f64, _at: usize) -> EvalResult<f64> {
            Ok(value.$real_fn())
        }
    };
}

infix_builtin!(add, +);
infix_builtin!(subtract, -);
infix_builtin!(multiply, *);
infix_builtin!(remainder, %);

function_builtin!(sqrt, sqrt);
function_builtin!(ln, ln);
function_builtin!(sin, sin);
function_builtin!(cos, cos);
function_builtin!(tan, tan);

/// Divides `left` by `right`.
///
/// # Errors
/// Returns [`EvaluationError::DivisionByZero`] when `right` is exactly zero.
///
/// # Example
/// ```
/// use reckon::{calculator::operator::builtin::divide, error::EvaluationError};
///
/// assert_eq!(divide(7.0, 2.0, 0).unwrap(), 3.5);
///
/// let err = divide(1.0, 0.0, 1).unwrap_err();
/// assert_eq!(err, EvaluationError::DivisionByZero { at: 1 });
/// ```
pub fn divide(left: f64, right: f64, at: usize) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(EvaluationError::DivisionByZero { at });
    }
    Ok(left / right)
}

/// Raises `left` to the power `right`.
pub fn power(left: f64, right: f64, _at: usize) -> EvalResult<f64> {
    Ok(left.powf(right))
}

/// Computes the factorial of the left operand.
///
/// The operand is truncated toward zero first. The result is `1 × 2 × … × n`
/// for `n ≥ 1` and `1` for every `n ≤ 0`, so negative and fractional operands
/// do not fail. Once the product overflows to infinity it stays there.
///
/// # Example
/// ```
/// use reckon::calculator::operator::builtin::factorial;
///
/// assert_eq!(factorial(5.0, 0.0, 0).unwrap(), 120.0);
/// assert_eq!(factorial(3.9, 0.0, 0).unwrap(), 6.0);
/// assert_eq!(factorial(-4.0, 0.0, 0).unwrap(), 1.0);
/// assert!(factorial(1e9, 0.0, 0).unwrap().is_infinite());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn factorial(value: f64, _right: f64, _at: usize) -> EvalResult<f64> {
    let mut result = 1.0;
    for i in 1..=truncate_toward_zero(value) {
        result *= i as f64;
        if result.is_infinite() {
            break;
        }
    }
    Ok(result)
}
