use crate::{
    calculator::{
        operator::core::{Fixity, Operator, OperatorTable},
        token::{Token, TokenKind},
    },
    error::{SyntaxError, SyntaxResult},
};

/// Reorders an infix token sequence into postfix (Reverse Polish) order.
///
/// Numbers go straight to the output. An infix or suffix operator first moves
/// every operator on top of the stack with a precedence greater than or equal
/// to its own to the output (equal precedence pops, so operators associate to
/// the left), then is pushed. A function operator is pushed as is, since its
/// operand has not been read yet. `(` is pushed; `)` moves operators to the
/// output until the matching `(` is found and dropped.
///
/// # Errors
/// - `MismatchedParentheses` for a `)` without a matching `(`, or a `(` that
///   is never closed.
/// - `InvalidOperator` for an operator token that is not in `operators`.
///
/// # Example
/// ```
/// use reckon::calculator::{lexer::tokenize, operator::core::OperatorTable, postfix::to_postfix};
///
/// let table = OperatorTable::standard();
/// let tokens = tokenize("1+2*(3-4)", &table).unwrap();
/// let postfix = to_postfix(&tokens, &table).unwrap();
///
/// let texts: Vec<_> = postfix.iter().map(|t| t.text).collect();
/// assert_eq!(texts, ["1", "2", "3", "4", "-", "*", "+"]);
/// ```
pub fn to_postfix<'a>(tokens: &[Token<'a>],
                      operators: &OperatorTable)
                      -> SyntaxResult<Vec<Token<'a>>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token<'a>> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number => output.push(*token),
            TokenKind::Operator => {
                let incoming = lookup(token, operators)?;
                if incoming.fixity != Fixity::Function {
                    while let Some(top) = stack.last().copied()
                          && top.is_operator()
                          && operators.get(top.text)
                                      .is_some_and(|op| op.precedence >= incoming.precedence)
                    {
                        stack.pop();
                        output.push(top);
                    }
                }
                stack.push(*token);
            },
            TokenKind::LeftParen => stack.push(*token),
            TokenKind::RightParen => loop {
                match stack.pop() {
                    Some(top) if top.kind == TokenKind::LeftParen => break,
                    Some(top) => output.push(top),
                    None => return Err(SyntaxError::MismatchedParentheses { at: token.start }),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.is_paren() {
            return Err(SyntaxError::MismatchedParentheses { at: top.start });
        }
        output.push(top);
    }

    Ok(output)
}

fn lookup<'t>(token: &Token<'_>, operators: &'t OperatorTable) -> SyntaxResult<&'t Operator> {
    operators.get(token.text)
             .ok_or_else(|| SyntaxError::InvalidOperator { symbol: token.text.to_string(),
                                                           at:     token.start, })
}
