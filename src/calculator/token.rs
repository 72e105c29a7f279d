use std::fmt;

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeric literal such as `3` or `2.5`.
    Number,
    /// A registered operator such as `+`, `!` or `sqrt`.
    Operator,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "NUMBER"),
            Self::Operator => write!(f, "OPERATOR"),
            Self::LeftParen => write!(f, "LEFT_PAREN"),
            Self::RightParen => write!(f, "RIGHT_PAREN"),
        }
    }
}

/// A lexical token borrowed from the expression text.
///
/// `start` and `end` are byte offsets into the original input (`end` is
/// exclusive), not character counts: every non-ASCII character before a token
/// shifts its offsets past the character index. They are only used for
/// diagnostics.
///
/// # Example
/// ```
/// use reckon::calculator::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Operator, "sqrt", 4, 8);
/// assert!(token.is_operator());
/// assert_eq!(token.to_string(), "OPERATOR('sqrt')[4..8]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// What kind of token this is.
    pub kind:  TokenKind,
    /// The lexeme as it appears in the input.
    pub text:  &'a str,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end:   usize,
}

impl<'a> Token<'a> {
    /// Creates a token from its parts.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str, start: usize, end: usize) -> Self {
        Self { kind,
               text,
               start,
               end }
    }

    /// Returns `true` for operator tokens.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::Operator)
    }

    /// Returns `true` for `(` and `)`.
    #[must_use]
    pub const fn is_paren(&self) -> bool {
        matches!(self.kind, TokenKind::LeftParen | TokenKind::RightParen)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')[{}..{}]", self.kind, self.text, self.start, self.end)
    }
}

/// Renders a token list on one line, separated by spaces.
///
/// Used for debug logging of the pipeline stages.
#[must_use]
pub fn render(tokens: &[Token<'_>]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
