use std::ops::Range;

use logos::Logos;

use crate::{
    calculator::{
        operator::core::OperatorTable,
        token::{Token, TokenKind},
        validator::validate,
    },
    error::{SyntaxError, SyntaxResult},
};

/// A raw run of characters found by the scanner.
///
/// Digits and decimal points stick together, parentheses stand alone, spaces
/// separate runs, and every other character sticks together with its
/// neighbours into a symbol run that still has to be split into operators.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    /// Digits and decimal points, such as `3`, `2.5` or `1.2.3`.
    #[regex(r"[0-9.]+")]
    Number,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// One or more ASCII spaces.
    #[regex(r" +")]
    Space,
    /// Anything else, such as `+`, `*sqrt` or `sin`.
    #[regex(r"[^0-9. ()]+", allow_greedy = true)]
    Symbol,
}

/// Tokenizes an expression and validates the resulting token sequence.
///
/// Number runs become `Number` tokens and parentheses become paren tokens.
/// Every symbol run is split into registered operators: if the whole run is an
/// operator it becomes one token, otherwise the run is scanned left to right
/// and the shortest prefix that names an operator is taken each time. The
/// token list is checked by [`validate`] before it is returned.
///
/// # Parameters
/// - `input`: The expression text.
/// - `operators`: Table used to recognize operators.
///
/// # Returns
/// The tokens, borrowing their text from `input`.
///
/// # Errors
/// - `InvalidOperator` if part of a symbol run is not an operator.
/// - `SpaceInOperator` if a space splits an operator, as in `sq rt`.
/// - Any error raised by [`validate`].
///
/// # Example
/// ```
/// use reckon::calculator::{
///     lexer::tokenize,
///     operator::core::OperatorTable,
///     token::TokenKind,
/// };
///
/// let table = OperatorTable::standard();
/// let tokens = tokenize("2*sqrt(4)", &table).unwrap();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
/// assert_eq!(texts, ["2", "*", "sqrt", "(", "4", ")"]);
/// assert_eq!(tokens[2].kind, TokenKind::Operator);
/// assert_eq!((tokens[2].start, tokens[2].end), (2, 6));
/// ```
pub fn tokenize<'a>(input: &'a str, operators: &OperatorTable) -> SyntaxResult<Vec<Token<'a>>> {
    let runs = scan(input)?;
    let mut tokens = Vec::with_capacity(runs.len());

    for (index, (run, span)) in runs.iter().enumerate() {
        let text = &input[span.clone()];
        match run {
            Run::Number => tokens.push(Token::new(TokenKind::Number, text, span.start, span.end)),
            Run::LeftParen => {
                tokens.push(Token::new(TokenKind::LeftParen, text, span.start, span.end));
            },
            Run::RightParen => {
                tokens.push(Token::new(TokenKind::RightParen, text, span.start, span.end));
            },
            Run::Space => {},
            Run::Symbol => match split_operators(text, operators) {
                Ok(pieces) => {
                    log::trace!("split symbol run '{text}' into {} operator(s)", pieces.len());
                    for piece in pieces {
                        let (start, end) = (span.start + piece.start, span.start + piece.end);
                        tokens.push(Token::new(TokenKind::Operator, &text[piece], start, end));
                    }
                },
                Err(unmatched) => {
                    return Err(symbol_error(input, span, &runs[index + 1..], unmatched, operators));
                },
            },
        }
    }

    validate(&tokens, operators)?;
    Ok(tokens)
}

/// Scans the input into runs with their byte spans.
///
/// Every character belongs to one of the run patterns, so the scanner only
/// fails if `logos` rejects a slice outright.
fn scan(input: &str) -> SyntaxResult<Vec<(Run, Range<usize>)>> {
    let mut lexer = Run::lexer(input);
    let mut runs = Vec::new();

    while let Some(run) = lexer.next() {
        match run {
            Ok(run) => runs.push((run, lexer.span())),
            Err(()) => {
                return Err(SyntaxError::InvalidOperator { symbol: lexer.slice().to_string(),
                                                          at:     lexer.span().start, });
            },
        }
    }

    Ok(runs)
}

/// Splits a symbol run into operator ranges relative to the run.
///
/// Returns the offset where the unmatched remainder starts on failure.
fn split_operators(run: &str, operators: &OperatorTable) -> Result<Vec<Range<usize>>, usize> {
    if operators.is_valid(run) {
        return Ok(vec![0..run.len()]);
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    for (offset, c) in run.char_indices() {
        let end = offset + c.len_utf8();
        if operators.is_valid(&run[start..end]) {
            pieces.push(start..end);
            start = end;
        }
    }

    if start < run.len() {
        return Err(start);
    }
    Ok(pieces)
}

/// Builds the error for a symbol run that could not be split.
///
/// When the run is followed by spaces and another symbol run, and the two runs
/// glued together split cleanly, the space is what broke the operator.
fn symbol_error(input: &str,
                span: &Range<usize>,
                rest: &[(Run, Range<usize>)],
                unmatched: usize,
                operators: &OperatorTable)
                -> SyntaxError {
    if let [(Run::Space, space), (Run::Symbol, next), ..] = rest {
        let joined = format!("{}{}", &input[span.clone()], &input[next.clone()]);
        if split_operators(&joined, operators).is_ok() {
            return SyntaxError::SpaceInOperator { symbol: joined,
                                                  at:     space.start, };
        }
    }

    let at = span.start + unmatched;
    SyntaxError::InvalidOperator { symbol: input[at..span.end].to_string(),
                                   at }
}
