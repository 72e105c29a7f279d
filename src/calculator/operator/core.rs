use std::collections::{HashMap, hash_map};

use crate::{calculator::operator::builtin, error::EvalResult};

/// Relative binding strength of an operator.
///
/// Variants are ordered from weakest to strongest, so precedences compare
/// with `<` and `>=` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// `+` and `-`.
    Normal,
    /// `*`, `/` and `%`.
    Middle,
    /// `^`, `!` and every function.
    High,
}

/// Where an operator is written relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    /// Between two operands, such as `1 + 2`.
    Infix,
    /// Before a single operand, written like a call: `sqrt(4)`.
    Function,
    /// After a single operand, such as `5!`.
    Suffix,
}

impl Fixity {
    /// Number of operands consumed by an operator of this fixity.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Infix => 2,
            Self::Function | Self::Suffix => 1,
        }
    }
}

/// Type alias for operator behaviors.
///
/// A behavior receives the left operand, the right operand, and the byte
/// offset of the operator token. Unary operators receive their operand as
/// `left` and `0.0` as `right`.
pub type OperatorFn = fn(f64, f64, usize) -> EvalResult<f64>;

/// The registered definition of one operator.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    /// Canonical text of the operator, such as `+` or `sqrt`.
    pub symbol:     &'static str,
    /// How the operator is applied to its operands.
    pub fixity:     Fixity,
    /// Binding strength used by the postfix converter.
    pub precedence: Precedence,
    /// The behavior.
    pub eval:       OperatorFn,
}

impl Operator {
    /// Creates an operator descriptor.
    #[must_use]
    pub const fn new(symbol: &'static str,
                     fixity: Fixity,
                     precedence: Precedence,
                     eval: OperatorFn)
                     -> Self {
        Self { symbol,
               fixity,
               precedence,
               eval }
    }

    /// Applies the operator behavior.
    ///
    /// # Example
    /// ```
    /// use reckon::calculator::operator::core::OperatorTable;
    ///
    /// let table = OperatorTable::standard();
    /// let minus = table.get("-").unwrap();
    /// assert_eq!(minus.apply(5.0, 3.0, 0).unwrap(), 2.0);
    /// ```
    pub fn apply(&self, left: f64, right: f64, at: usize) -> EvalResult<f64> {
        (self.eval)(left, right, at)
    }
}

/// Defines the standard operators by generating a static table and a symbol
/// list.
///
/// Each entry provides:
/// - a symbol,
/// - a fixity,
/// - a precedence,
/// - a function pointer implementing the behavior.
///
/// The macro produces:
/// - `STANDARD_TABLE` (static descriptors used by [`OperatorTable::standard`]),
/// - `STANDARD_OPERATORS` (public list of standard symbols).
macro_rules! standard_operators {
    (
        $(
            $symbol:literal => {
                fixity: $fixity:expr,
                precedence: $precedence:expr,
                eval: $eval:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static STANDARD_TABLE: &[Operator] = &[
            $(
                Operator { symbol: $symbol, fixity: $fixity, precedence: $precedence, eval: $eval },
            )*
        ];
        /// Symbols of every operator in the standard table.
        pub const STANDARD_OPERATORS: &[&str] = &[
            $($symbol,)*
        ];
    };
}

standard_operators! {
    "+"    => { fixity: Fixity::Infix,    precedence: Precedence::Normal, eval: builtin::add },
    "-"    => { fixity: Fixity::Infix,    precedence: Precedence::Normal, eval: builtin::subtract },
    "*"    => { fixity: Fixity::Infix,    precedence: Precedence::Middle, eval: builtin::multiply },
    "/"    => { fixity: Fixity::Infix,    precedence: Precedence::Middle, eval: builtin::divide },
    "%"    => { fixity: Fixity::Infix,    precedence: Precedence::Middle, eval: builtin::remainder },
    "^"    => { fixity: Fixity::Infix,    precedence: Precedence::High,   eval: builtin::power },
    "!"    => { fixity: Fixity::Suffix,   precedence: Precedence::High,   eval: builtin::factorial },
    "sqrt" => { fixity: Fixity::Function, precedence: Precedence::High,   eval: builtin::sqrt },
    "log"  => { fixity: Fixity::Function, precedence: Precedence::High,   eval: builtin::ln },
    "sin"  => { fixity: Fixity::Function, precedence: Precedence::High,   eval: builtin::sin },
    "cos"  => { fixity: Fixity::Function, precedence: Precedence::High,   eval: builtin::cos },
    "tan"  => { fixity: Fixity::Function, precedence: Precedence::High,   eval: builtin::tan },
}

/// Maps operator symbols to their descriptors.
///
/// A table is built once and then only read, so one table can be shared by
/// reference between any number of evaluations. Symbols are unique: every
/// symbol resolves to exactly one [`Operator`].
///
/// # Example
/// ```
/// use reckon::calculator::operator::core::{Fixity, Operator, OperatorTable, Precedence};
///
/// let mut table = OperatorTable::standard();
/// assert!(table.is_valid("sqrt"));
/// assert!(!table.is_valid("sq"));
///
/// fn double(value: f64, _: f64, _: usize) -> reckon::error::EvalResult<f64> {
///     Ok(value * 2.0)
/// }
///
/// table.register(Operator::new("dbl", Fixity::Function, Precedence::High, double));
/// assert!(table.is_valid("dbl"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    operators: HashMap<&'static str, Operator>,
}

impl OperatorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the standard operators:
    /// `+ - * / % ^ ! sqrt log sin cos tan`.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_TABLE.iter().copied().collect()
    }

    /// Adds an operator, returning the descriptor it replaced, if any.
    pub fn register(&mut self, operator: Operator) -> Option<Operator> {
        self.operators.insert(operator.symbol, operator)
    }

    /// Returns `true` if `symbol` exactly matches a registered operator.
    #[must_use]
    pub fn is_valid(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    /// Looks up the descriptor registered for `symbol`.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Operator> {
        self.operators.get(symbol)
    }

    /// Number of registered operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Returns `true` if no operator is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Iterates over the registered operators in no particular order.
    pub fn iter(&self) -> hash_map::Values<'_, &'static str, Operator> {
        self.operators.values()
    }
}

impl FromIterator<Operator> for OperatorTable {
    fn from_iter<T: IntoIterator<Item = Operator>>(iter: T) -> Self {
        let mut table = Self::new();
        for operator in iter {
            table.register(operator);
        }
        table
    }
}

impl<'a> IntoIterator for &'a OperatorTable {
    type IntoIter = hash_map::Values<'a, &'static str, Operator>;
    type Item = &'a Operator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
