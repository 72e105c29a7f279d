use thiserror::Error;

/// Result type used by the postfix evaluator and the operator behaviors.
pub type EvalResult<T> = Result<T, EvaluationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while computing a postfix sequence.
pub enum EvaluationError {
    /// An operator did not find enough operands, or operands were left over.
    #[error("Error at position {at}: Invalid expression.")]
    InvalidExpression {
        /// Where the offending token starts.
        at: usize,
    },
    /// There was nothing to evaluate, for example `()`.
    #[error("Invalid expression: nothing to evaluate.")]
    EmptyExpression,
    /// Attempted division by zero.
    #[error("Error at position {at}: Division by zero.")]
    DivisionByZero {
        /// Where the division operator starts.
        at: usize,
    },
    /// A numeric literal could not be read, such as `1.2.3`.
    #[error("Error at position {at}: Invalid number '{literal}'.")]
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// Where the literal starts.
        at:      usize,
    },
    /// An operator token is not registered in the operator table in use.
    #[error("Error at position {at}: Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The unknown operator text.
        symbol: String,
        /// Where the operator starts.
        at:     usize,
    },
}
