use crate::{
    calculator::{
        operator::core::{Fixity, OperatorTable},
        token::{Token, TokenKind},
    },
    error::{SyntaxError, SyntaxResult},
};

/// Checks a token sequence for structural well-formedness.
///
/// Rules, in order:
/// 1. the sequence must not be empty;
/// 2. it must not start with an infix or suffix operator (a function such as
///    `sqrt` may lead);
/// 3. it must not end with an infix or function operator (a suffix such as
///    `!` may trail);
/// 4. two numbers must not follow each other directly.
///
/// Parenthesis balance is checked by the postfix converter and operand counts
/// by the evaluator.
///
/// # Errors
/// `NoTokens`, `LeadingOperator`, `TrailingOperator` or `AdjacentNumbers`.
///
/// # Example
/// ```
/// use reckon::{
///     calculator::{
///         operator::core::OperatorTable,
///         token::{Token, TokenKind},
///         validator::validate,
///     },
///     error::SyntaxError,
/// };
///
/// let table = OperatorTable::standard();
/// let tokens = [Token::new(TokenKind::Number, "1", 0, 1),
///               Token::new(TokenKind::Number, "2", 2, 3)];
///
/// assert_eq!(validate(&tokens, &table),
///            Err(SyntaxError::AdjacentNumbers { at: 2 }));
/// ```
pub fn validate(tokens: &[Token<'_>], operators: &OperatorTable) -> SyntaxResult<()> {
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Err(SyntaxError::NoTokens);
    };

    if first.is_operator() && fixity_of(first, operators) != Some(Fixity::Function) {
        return Err(SyntaxError::LeadingOperator { symbol: first.text.to_string(),
                                                  at:     first.start, });
    }

    if last.is_operator() && fixity_of(last, operators) != Some(Fixity::Suffix) {
        return Err(SyntaxError::TrailingOperator { symbol: last.text.to_string(),
                                                   at:     last.start, });
    }

    if let Some(pair) = tokens.windows(2)
                              .find(|pair| {
                                  pair[0].kind == TokenKind::Number
                                  && pair[1].kind == TokenKind::Number
                              })
    {
        return Err(SyntaxError::AdjacentNumbers { at: pair[1].start });
    }

    Ok(())
}

fn fixity_of(token: &Token<'_>, operators: &OperatorTable) -> Option<Fixity> {
    operators.get(token.text).map(|operator| operator.fixity)
}
