/// Numeric conversion helpers.
///
/// This module turns numeric literal text into `f64` values and provides the
/// integer truncation used by the factorial operator. Every conversion that
/// can fail returns an [`EvalResult`](crate::error::EvalResult) carrying the
/// position of the offending literal.
pub mod num;
