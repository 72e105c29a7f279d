use crate::{
    calculator::{
        operator::core::OperatorTable,
        token::{Token, TokenKind},
    },
    error::{EvalResult, EvaluationError},
    util::num::parse_literal,
};

/// A value on the operand stack together with the offset of the token that
/// produced it.
#[derive(Debug, Clone, Copy)]
struct Operand {
    value: f64,
    at:    usize,
}

/// Evaluates a postfix token sequence.
///
/// Numbers are parsed and pushed. An operator pops as many operands as its
/// fixity's arity. A function or suffix operator receives its one operand as
/// the left operand; an infix operator receives the older operand on the
/// left, so `a b -` computes `a - b`. Every operator result is pushed back.
/// Exactly one value must remain at the end.
///
/// # Errors
/// - `InvalidNumber` for a malformed literal.
/// - `InvalidExpression` when an operator lacks operands, when values are left
///   over, or when a parenthesis reaches the evaluator.
/// - `EmptyExpression` when there is nothing to evaluate.
/// - `UnknownOperator` for an operator missing from `operators`.
/// - Any error reported by an operator, such as `DivisionByZero`.
///
/// # Example
/// ```
/// use reckon::calculator::{
///     evaluator::evaluate,
///     operator::core::OperatorTable,
///     token::{Token, TokenKind},
/// };
///
/// let table = OperatorTable::standard();
/// let postfix = [Token::new(TokenKind::Number, "7", 0, 1),
///                Token::new(TokenKind::Number, "2", 4, 5),
///                Token::new(TokenKind::Operator, "-", 2, 3)];
///
/// assert_eq!(evaluate(&postfix, &table).unwrap(), 5.0);
/// ```
pub fn evaluate(postfix: &[Token<'_>], operators: &OperatorTable) -> EvalResult<f64> {
    let mut stack: Vec<Operand> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token.kind {
            TokenKind::Number => {
                stack.push(Operand { value: parse_literal(token.text, token.start)?,
                                     at:    token.start, });
            },
            TokenKind::Operator => {
                let operator = operators.get(token.text).ok_or_else(|| {
                                   EvaluationError::UnknownOperator { symbol: token.text.to_string(),
                                                                      at:     token.start, }
                               })?;

                let operands = pop(&mut stack, operator.fixity.arity(), token)?;
                let value = match operands.as_slice() {
                    [operand] => operator.apply(operand.value, 0.0, token.start)?,
                    [left, right] => operator.apply(left.value, right.value, token.start)?,
                    _ => return Err(EvaluationError::InvalidExpression { at: token.start }),
                };

                stack.push(Operand { value,
                                     at: token.start });
            },
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(EvaluationError::InvalidExpression { at: token.start });
            },
        }
    }

    match stack.as_slice() {
        [] => Err(EvaluationError::EmptyExpression),
        [result] => Ok(result.value),
        [_, extra, ..] => Err(EvaluationError::InvalidExpression { at: extra.at }),
    }
}

/// Removes the top `count` operands, oldest first.
fn pop(stack: &mut Vec<Operand>, count: usize, token: &Token<'_>) -> EvalResult<Vec<Operand>> {
    let split = stack.len()
                     .checked_sub(count)
                     .ok_or(EvaluationError::InvalidExpression { at: token.start })?;
    Ok(stack.split_off(split))
}
