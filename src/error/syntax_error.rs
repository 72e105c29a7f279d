use thiserror::Error;

/// Result type used by the tokenizer, the validator and the postfix converter.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Represents all errors that can occur while reading the structure of an
/// expression.
///
/// Positions are byte offsets into the original expression text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The expression did not contain a single token.
    #[error("No tokens found.")]
    NoTokens,
    /// The expression started with an operator that needs a left operand.
    #[error("Error at position {at}: Expression cannot start with operator '{symbol}'.")]
    LeadingOperator {
        /// The operator found at the start.
        symbol: String,
        /// Where the operator starts.
        at:     usize,
    },
    /// The expression ended with an operator that needs a right operand.
    #[error("Error at position {at}: Expression cannot end with operator '{symbol}'.")]
    TrailingOperator {
        /// The operator found at the end.
        symbol: String,
        /// Where the operator starts.
        at:     usize,
    },
    /// Two numbers followed each other without an operator between them.
    #[error("Error at position {at}: Too many numbers without an operator between them.")]
    AdjacentNumbers {
        /// Where the second number starts.
        at: usize,
    },
    /// A run of symbol characters could not be split into known operators.
    #[error("Error at position {at}: Invalid operator: {symbol}.")]
    InvalidOperator {
        /// The characters that did not match any operator.
        symbol: String,
        /// Where the unmatched characters start.
        at:     usize,
    },
    /// A space was found in the middle of an operator, such as `sq rt`.
    #[error("Error at position {at}: Invalid space inside operator '{symbol}'.")]
    SpaceInOperator {
        /// The operator text with the space removed.
        symbol: String,
        /// Where the space starts.
        at:     usize,
    },
    /// A parenthesis was never closed, or was closed without being opened.
    #[error("Error at position {at}: Mismatched parentheses.")]
    MismatchedParentheses {
        /// Where the unmatched parenthesis is.
        at: usize,
    },
}
