use crate::{
    calculator::{
        evaluator::evaluate,
        lexer::tokenize,
        operator::core::OperatorTable,
        postfix::to_postfix,
        token::render,
    },
    error::CalcError,
};

/// Evaluates expressions against one operator table.
///
/// A `Calculator` owns its [`OperatorTable`] and never mutates it while
/// evaluating, so one calculator can be shared by reference between threads
/// and every call sees exactly the same operators.
///
/// ## Usage
///
/// `Calculator::new()` uses the standard operators. A custom table can be
/// supplied with [`Calculator::with_operators`].
#[derive(Debug, Clone)]
pub struct Calculator {
    operators: OperatorTable,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the standard operator table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_operators(OperatorTable::standard())
    }

    /// Creates a calculator that uses `operators`.
    #[must_use]
    pub const fn with_operators(operators: OperatorTable) -> Self {
        Self { operators }
    }

    /// The operator table in use.
    #[must_use]
    pub const fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Evaluates an expression and returns its value.
    ///
    /// The expression is tokenized and validated, reordered into postfix
    /// order, and evaluated. Each stage is logged at `debug` level.
    ///
    /// # Errors
    /// A [`CalcError::Syntax`] for malformed input, or a
    /// [`CalcError::Evaluation`] when the value cannot be computed.
    ///
    /// # Example
    /// ```
    /// use reckon::calculator::core::Calculator;
    ///
    /// let calculator = Calculator::new();
    /// assert_eq!(calculator.evaluate_expression("(1+2)*sqrt(4)").unwrap(), 6.0);
    /// assert!(calculator.evaluate_expression("1/0").unwrap_err().is_evaluation());
    /// ```
    pub fn evaluate_expression(&self, expression: &str) -> Result<f64, CalcError> {
        let tokens = tokenize(expression, &self.operators)?;
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("tokens: {}", render(&tokens));
        }

        let postfix = to_postfix(&tokens, &self.operators)?;
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("postfix: {}", render(&postfix));
        }

        let result = evaluate(&postfix, &self.operators)?;
        log::debug!("result: {result}");
        Ok(result)
    }
}
