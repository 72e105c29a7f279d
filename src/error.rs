use thiserror::Error;

/// Syntax errors.
///
/// Defines every error that can occur while an expression is tokenized,
/// validated, or reordered into postfix form. Syntax errors describe malformed
/// input structure and are detected before any arithmetic happens.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains the errors raised while a postfix sequence is folded into a
/// number: missing operands, malformed literals, and failures reported by the
/// operators themselves such as division by zero.
pub mod evaluation_error;

pub use evaluation_error::{EvalResult, EvaluationError};
pub use syntax_error::{SyntaxError, SyntaxResult};

/// Any error produced while evaluating an expression end to end.
///
/// The message of the wrapped error is displayed unchanged, so callers can
/// print a `CalcError` directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression text was malformed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The expression was well formed but could not be computed.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl CalcError {
    /// Returns `true` if the failure happened before evaluation started.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Returns `true` if the failure happened while computing the result.
    #[must_use]
    pub const fn is_evaluation(&self) -> bool {
        matches!(self, Self::Evaluation(_))
    }
}
