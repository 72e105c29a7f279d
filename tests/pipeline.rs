use reckon::{
    Fixity, Operator, OperatorTable, Precedence,
    calculator::{
        evaluator::evaluate,
        lexer::tokenize,
        operator::core::STANDARD_OPERATORS,
        postfix::to_postfix,
        token::{Token, TokenKind, render},
        validator::validate,
    },
    error::{EvalResult, EvaluationError, SyntaxError},
};

fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
    tokens.iter().map(|t| t.text).collect()
}

fn postfix_of(src: &str) -> Vec<String> {
    let table = OperatorTable::standard();
    let tokens = tokenize(src, &table).unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"));
    let postfix = to_postfix(&tokens, &table).unwrap_or_else(|e| panic!("'{src}' failed to convert: {e}"));
    postfix.iter().map(|t| t.text.to_string()).collect()
}

fn op(text: &str, start: usize) -> Token<'_> {
    Token::new(TokenKind::Operator, text, start, start + text.len())
}

fn num(text: &str, start: usize) -> Token<'_> {
    Token::new(TokenKind::Number, text, start, start + text.len())
}

fn power(left: f64, right: f64, _: usize) -> EvalResult<f64> {
    Ok(left.powf(right))
}

#[test]
fn standard_table_contents() {
    let table = OperatorTable::standard();
    assert_eq!(table.len(), 12);
    assert_eq!(STANDARD_OPERATORS.len(), 12);
    for symbol in STANDARD_OPERATORS {
        assert!(table.is_valid(symbol), "{symbol} should be registered");
    }

    let precedence = |s: &str| table.get(s).map(|op| op.precedence);
    let fixity = |s: &str| table.get(s).map(|op| op.fixity);

    assert_eq!(precedence("+"), Some(Precedence::Normal));
    assert_eq!(precedence("-"), Some(Precedence::Normal));
    assert_eq!(precedence("*"), Some(Precedence::Middle));
    assert_eq!(precedence("/"), Some(Precedence::Middle));
    assert_eq!(precedence("%"), Some(Precedence::Middle));
    assert_eq!(precedence("^"), Some(Precedence::High));
    assert_eq!(fixity("!"), Some(Fixity::Suffix));
    assert_eq!(fixity("log"), Some(Fixity::Function));
    assert_eq!(fixity("^"), Some(Fixity::Infix));

    assert!(!table.is_valid("sq"));
    assert!(!table.is_valid(""));
    assert!(table.get("ln").is_none());
    assert!(OperatorTable::new().is_empty());
    assert!(Precedence::Normal < Precedence::Middle && Precedence::Middle < Precedence::High);
    assert_eq!(Fixity::Infix.arity(), 2);
    assert_eq!(Fixity::Suffix.arity(), 1);
}

#[test]
fn standard_table_iterates_every_standard_symbol() {
    let table = OperatorTable::standard();

    let mut expected: Vec<&str> = STANDARD_OPERATORS.to_vec();
    expected.sort_unstable();

    let mut symbols: Vec<&str> = table.iter().map(|op| op.symbol).collect();
    symbols.sort_unstable();
    assert_eq!(symbols, expected);

    let mut symbols = Vec::new();
    for operator in &table {
        assert_eq!(table.get(operator.symbol).map(|op| op.fixity), Some(operator.fixity));
        symbols.push(operator.symbol);
    }
    symbols.sort_unstable();
    assert_eq!(symbols, expected);

    let copy: OperatorTable = table.iter().copied().collect();
    assert_eq!(copy.len(), table.len());
}

#[test]
fn tokens_carry_kinds_and_spans() {
    let table = OperatorTable::standard();
    let tokens = tokenize("12 + (3.5)", &table).unwrap();

    assert_eq!(tokens,
               [num("12", 0),
                op("+", 3),
                Token::new(TokenKind::LeftParen, "(", 5, 6),
                num("3.5", 6),
                Token::new(TokenKind::RightParen, ")", 9, 10)]);
    assert_eq!(render(&tokens[..2]), "NUMBER('12')[0..2] OPERATOR('+')[3..4]");
}

#[test]
fn glued_operators_are_split() {
    let table = OperatorTable::standard();
    assert_eq!(texts(&tokenize("2*sqrt(4)", &table).unwrap()), ["2", "*", "sqrt", "(", "4", ")"]);
    assert_eq!(texts(&tokenize("3!*2", &table).unwrap()), ["3", "!", "*", "2"]);
    assert_eq!(texts(&tokenize("1-log(1)", &table).unwrap()), ["1", "-", "log", "(", "1", ")"]);
    assert_eq!(texts(&tokenize("cos(0)+sin(0)", &table).unwrap()),
               ["cos", "(", "0", ")", "+", "sin", "(", "0", ")"]);

    let tokens = tokenize("1+-2", &table).unwrap();
    assert_eq!((tokens[1].start, tokens[1].end), (1, 2));
    assert_eq!((tokens[2].start, tokens[2].end), (2, 3));
}

#[test]
fn whole_run_wins_but_otherwise_shortest_prefix_wins() {
    let mut table = OperatorTable::standard();
    table.register(Operator::new("**", Fixity::Infix, Precedence::High, power));

    assert_eq!(texts(&tokenize("2**3", &table).unwrap()), ["2", "**", "3"]);
    // `**sqrt` is not an operator as a whole, so `*` is taken before `**`
    // can ever match.
    assert_eq!(texts(&tokenize("2**sqrt(4)", &table).unwrap()),
               ["2", "*", "*", "sqrt", "(", "4", ")"]);
}

#[test]
fn tokenizer_reports_the_unmatched_part() {
    let table = OperatorTable::standard();
    assert_eq!(tokenize("2+sqrx(1)", &table),
               Err(SyntaxError::InvalidOperator { symbol: "sqrx".to_string(),
                                                  at:     2, }));
    assert_eq!(tokenize("2 $ 2", &table),
               Err(SyntaxError::InvalidOperator { symbol: "$".to_string(),
                                                  at:     2, }));
    assert_eq!(tokenize("si n(0)", &table),
               Err(SyntaxError::SpaceInOperator { symbol: "sin".to_string(),
                                                  at:     2, }));
}

#[test]
fn tokenizer_validates_its_output() {
    let table = OperatorTable::standard();
    assert_eq!(tokenize("", &table), Err(SyntaxError::NoTokens));
    assert!(matches!(tokenize("*2", &table), Err(SyntaxError::LeadingOperator { .. })));
    assert!(matches!(tokenize("3 4", &table), Err(SyntaxError::AdjacentNumbers { .. })));
}

#[test]
fn validator_rules() {
    let table = OperatorTable::standard();

    assert_eq!(validate(&[], &table), Err(SyntaxError::NoTokens));
    assert_eq!(validate(&[num("1", 0)], &table), Ok(()));

    // A leading function and a trailing suffix are fine.
    assert_eq!(validate(&[op("sqrt", 0), num("4", 5)], &table), Ok(()));
    assert_eq!(validate(&[num("5", 0), op("!", 1)], &table), Ok(()));

    assert_eq!(validate(&[op("!", 0), num("5", 1)], &table),
               Err(SyntaxError::LeadingOperator { symbol: "!".to_string(),
                                                  at:     0, }));
    assert_eq!(validate(&[num("4", 0), op("sqrt", 1)], &table),
               Err(SyntaxError::TrailingOperator { symbol: "sqrt".to_string(),
                                                   at:     1, }));
    assert_eq!(validate(&[num("1", 0), op("*", 1)], &table),
               Err(SyntaxError::TrailingOperator { symbol: "*".to_string(),
                                                   at:     1, }));
    assert_eq!(validate(&[num("1", 0), op("+", 1), num("2", 2), num("3", 4)], &table),
               Err(SyntaxError::AdjacentNumbers { at: 4 }));

    // Parenthesis balance is left to the converter.
    let unbalanced = [Token::new(TokenKind::LeftParen, "(", 0, 1), num("1", 1)];
    assert_eq!(validate(&unbalanced, &table), Ok(()));
}

#[test]
fn postfix_order() {
    assert_eq!(postfix_of("1+2"), ["1", "2", "+"]);
    assert_eq!(postfix_of("1+2*3"), ["1", "2", "3", "*", "+"]);
    assert_eq!(postfix_of("1*2+3"), ["1", "2", "*", "3", "+"]);
    assert_eq!(postfix_of("1-2-3"), ["1", "2", "-", "3", "-"]);
    assert_eq!(postfix_of("(1+2)*3"), ["1", "2", "+", "3", "*"]);
    assert_eq!(postfix_of("2^3^2"), ["2", "3", "^", "2", "^"]);
    assert_eq!(postfix_of("5!+1"), ["5", "!", "1", "+"]);
    assert_eq!(postfix_of("2^sqrt(4)"), ["2", "4", "sqrt", "^"]);
    assert_eq!(postfix_of("sqrt(4)^2"), ["4", "sqrt", "2", "^"]);
    assert_eq!(postfix_of("(1+2)*sqrt(4)-log(1)+3!*2^2"),
               ["1", "2", "+", "4", "sqrt", "*", "1", "log", "-", "3", "!", "2", "2", "^", "*",
                "+"]);
}

#[test]
fn postfix_rejects_unbalanced_parentheses() {
    let table = OperatorTable::standard();
    let convert = |src: &str| {
        to_postfix(&tokenize(src, &table).unwrap(), &table).map(|postfix| postfix.len())
    };

    assert_eq!(convert("(1"), Err(SyntaxError::MismatchedParentheses { at: 0 }));
    assert_eq!(convert("1)"), Err(SyntaxError::MismatchedParentheses { at: 1 }));
    assert_eq!(convert("(1)+2)"), Err(SyntaxError::MismatchedParentheses { at: 5 }));
    assert_eq!(convert("((1))"), Ok(1));
}

#[test]
fn postfix_rejects_unregistered_operators() {
    let table = OperatorTable::standard();
    let tokens = [num("1", 0), op("&", 1), num("2", 2)];
    assert_eq!(to_postfix(&tokens, &table),
               Err(SyntaxError::InvalidOperator { symbol: "&".to_string(),
                                                  at:     1, }));
}

#[test]
fn evaluator_operand_order() {
    let table = OperatorTable::standard();
    assert_eq!(evaluate(&[num("8", 0), num("2", 2), op("/", 1)], &table), Ok(4.0));
    assert_eq!(evaluate(&[num("2", 0), num("8", 2), op("-", 1)], &table), Ok(-6.0));
    assert_eq!(evaluate(&[num("2", 0), num("3", 2), op("^", 1)], &table), Ok(8.0));
    assert_eq!(evaluate(&[num("9", 5), op("sqrt", 0)], &table), Ok(3.0));
    assert_eq!(evaluate(&[num("4", 0), op("!", 1)], &table), Ok(24.0));
    assert_eq!(evaluate(&[num("1", 0), num("4", 7), op("sqrt", 2), op("+", 1)], &table),
               Ok(3.0));
}

#[test]
fn evaluator_errors() {
    let table = OperatorTable::standard();

    assert_eq!(evaluate(&[], &table), Err(EvaluationError::EmptyExpression));
    assert_eq!(evaluate(&[num("1", 0), op("+", 1)], &table),
               Err(EvaluationError::InvalidExpression { at: 1 }));
    assert_eq!(evaluate(&[op("sqrt", 0)], &table),
               Err(EvaluationError::InvalidExpression { at: 0 }));
    assert_eq!(evaluate(&[num("1", 0), num("2", 2)], &table),
               Err(EvaluationError::InvalidExpression { at: 2 }));
    assert_eq!(evaluate(&[num("1", 0), num("0", 2), op("/", 1)], &table),
               Err(EvaluationError::DivisionByZero { at: 1 }));
    assert_eq!(evaluate(&[num("1", 0), op("#", 1)], &table),
               Err(EvaluationError::UnknownOperator { symbol: "#".to_string(),
                                                      at:     1, }));
    assert_eq!(evaluate(&[Token::new(TokenKind::LeftParen, "(", 0, 1)], &table),
               Err(EvaluationError::InvalidExpression { at: 0 }));
    assert_eq!(evaluate(&[num("..", 3)], &table),
               Err(EvaluationError::InvalidNumber { literal: "..".to_string(),
                                                    at:      3, }));
}
