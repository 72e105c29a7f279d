/// The calculator facade that runs the whole pipeline.
///
/// Holds the operator table and chains tokenizing, postfix conversion, and
/// evaluation behind a single call.
pub mod core;
/// The postfix evaluator folds a postfix sequence into a number.
///
/// # Responsibilities
/// - Parses numeric literals and keeps them on an operand stack.
/// - Dispatches every operator by fixity to its registered behavior.
/// - Reports missing or leftover operands and operator failures.
pub mod evaluator;
/// The lexer turns raw expression text into typed tokens.
///
/// The lexer scans the input into runs of digits, parentheses, spaces, and
/// symbol characters, then splits every symbol run into registered operators.
///
/// # Responsibilities
/// - Produces `Number`, `Operator`, and parenthesis tokens with byte spans.
/// - Splits glued operators such as `*sqrt` using the operator table.
/// - Rejects symbol runs that contain unknown operators.
pub mod lexer;
/// The operator registry.
///
/// Defines operator descriptors (symbol, fixity, precedence, and behavior),
/// the table that maps symbols to them, and the standard operator set.
pub mod operator;
/// The postfix converter reorders infix tokens into Reverse Polish order.
///
/// # Responsibilities
/// - Applies operator precedence with a left-associative tie-break.
/// - Removes parentheses and reports unbalanced ones.
pub mod postfix;
/// Token types shared by every stage of the pipeline.
pub mod token;
/// The validator checks the shape of a token sequence before conversion.
pub mod validator;
