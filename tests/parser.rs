use rpncalc::{
    Diagnostic, Number, Side,
    config::Limits,
    interpreter::{
        lexer::{Token, TokenKind, TokenList, tokenize},
        operator::{Arity, Associativity, BinaryOperator, Operator, UnaryOperator},
        parser::{
            core::shunting_yard,
            placement::{check_adjacent, check_bounds},
        },
    },
};

fn tokens(src: &str) -> Vec<Token> {
    tokenize(src, &Limits::default()).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
}

fn postfix(src: &str) -> String {
    match shunting_yard(&tokens(src)) {
        Ok(output) => TokenList(&output).to_string(),
        Err(e) => panic!("Failed to convert {src:?}: {e}"),
    }
}

fn parse_err(src: &str) -> Diagnostic {
    match shunting_yard(&tokens(src)) {
        Ok(output) => panic!("{src:?} converted to {} but was expected to fail",
                             TokenList(&output)),
        Err(e) => e,
    }
}

const fn missing(offset: usize, side: Side) -> Diagnostic {
    Diagnostic::OperatorMissingExpr { offset, side }
}

#[test]
fn precedence() {
    assert_eq!(postfix("1 + 2 * 3"), "1 2 3 * +");
    assert_eq!(postfix("1 * 2 + 3"), "1 2 * 3 +");
    assert_eq!(postfix("3 * (4 + 2) - ((1 - 5) * 3)"), "3 4 2 + * 1 5 - 3 * -");
}

#[test]
fn equal_precedence_groups_left_to_right() {
    assert_eq!(postfix("0+1+2+3+4"), "0 1 + 2 + 3 + 4 +");
    assert_eq!(postfix("8 - 4 + 2 - 1"), "8 4 - 2 + 1 -");
    assert_eq!(postfix("2 * 3 * 4"), "2 3 * 4 *");
}

#[test]
fn unary_operators_bind_tightest() {
    assert_eq!(postfix("-2 * 3"), "2 - 3 *");
    assert_eq!(postfix("2 * -3"), "2 3 - *");
    assert_eq!(postfix("-(-(2))"), "2 - -");
    assert_eq!(postfix("+1 - -1"), "1 + 1 - -");
}

#[test]
fn parentheses_never_reach_the_output() {
    let output = shunting_yard(&tokens("((1) + ((2)))")).unwrap();

    assert!(output.iter().all(|token| !token.is_paren()));
    assert_eq!(TokenList(&output).to_string(), "1 2 +");
}

#[test]
fn output_keeps_source_offsets() {
    let output = shunting_yard(&tokens("10 - 2 * 3")).unwrap();
    let offsets: Vec<_> = output.iter().map(|t| t.offset).collect();

    assert_eq!(offsets, [0, 5, 9, 7, 3]);
}

#[test]
fn unmatched_parentheses() {
    assert_eq!(parse_err("(1 + 2) - ((3 + 4) + 5"), Diagnostic::UnmatchedParen { offset: 10 });
    assert_eq!(parse_err("(1 + 2)) - 5"), Diagnostic::UnmatchedParen { offset: 7 });
    assert_eq!(parse_err("((1)"), Diagnostic::UnmatchedParen { offset: 0 });
    assert_eq!(parse_err(")1("), Diagnostic::UnmatchedParen { offset: 0 });
}

#[test]
fn empty_expressions() {
    assert_eq!(parse_err(""), Diagnostic::EmptyExpression { offset: 0 });
    assert_eq!(parse_err("   "), Diagnostic::EmptyExpression { offset: 0 });
    assert_eq!(parse_err("()"), Diagnostic::EmptyExpression { offset: 1 });
    assert_eq!(parse_err("1 + ( )"), Diagnostic::EmptyExpression { offset: 6 });
}

#[test]
fn leading_and_trailing_operators() {
    assert_eq!(parse_err("* 2"), missing(0, Side::Left));
    assert_eq!(parse_err(" * * 123 0  "), missing(1, Side::Left));
    assert_eq!(parse_err("1 +"), missing(2, Side::Right));
    assert_eq!(parse_err("1 * -"), missing(4, Side::Right));
    assert_eq!(parse_err("-"), missing(0, Side::Right));
}

#[test]
fn operators_missing_operands_inside() {
    assert_eq!(parse_err("1 + * 2"), missing(4, Side::Left));
    assert_eq!(parse_err("(* 1)"), missing(1, Side::Left));
    assert_eq!(parse_err("(1 +) * 2"), missing(3, Side::Right));
    assert_eq!(parse_err("--2"), missing(1, Side::Left));
}

#[test]
fn adjacent_operands() {
    assert_eq!(parse_err("1 2"), Diagnostic::InvalidLiteralExpr { offset: 0 });
    assert_eq!(parse_err("(1) 2"), Diagnostic::InvalidLiteralExpr { offset: 2 });
    assert_eq!(parse_err("2 (3)"), Diagnostic::InvalidLiteralExpr { offset: 0 });
    assert_eq!(parse_err("(1)(2)"), Diagnostic::InvalidLiteralExpr { offset: 2 });
}

#[test]
fn first_violation_in_source_order_wins() {
    assert_eq!(parse_err("(1 2"), Diagnostic::InvalidLiteralExpr { offset: 1 });
    assert_eq!(parse_err("1 + ) 2 ("), Diagnostic::OperatorMissingExpr { offset: 2,
                                                                          side:   Side::Right, });
}

#[test]
fn bounds_of_hand_built_sequences() {
    let neg = Token::new(TokenKind::Operator(Operator::Unary(UnaryOperator::Neg)), 0, 1);
    let one = Token::literal(Number::Integer(1), 1, 1);

    assert_eq!(check_bounds(&[]), Err(Diagnostic::EmptyExpression { offset: 0 }));
    assert_eq!(check_bounds(&[neg, one]), Ok(()));
    assert_eq!(check_bounds(&[one, neg]), Err(missing(0, Side::Right)));
}

#[test]
fn unary_operator_after_operand() {
    let one = Token::literal(Number::Integer(1), 0, 1);
    let neg = Token::new(TokenKind::Operator(Operator::Unary(UnaryOperator::Neg)), 2, 1);
    let close = Token::new(TokenKind::RParen, 0, 1);

    assert_eq!(check_adjacent(Some(&one), &neg),
               Err(Diagnostic::InvalidLiteralExpr { offset: 0 }));
    assert_eq!(check_adjacent(Some(&close), &neg),
               Err(Diagnostic::InvalidLiteralExpr { offset: 0 }));
    assert_eq!(check_adjacent(None, &neg), Ok(()));
}

#[test]
fn binary_operator_after_operand() {
    let one = Token::literal(Number::Integer(1), 0, 1);
    let add = Token::new(TokenKind::Operator(Operator::Binary(BinaryOperator::Add)), 2, 1);

    assert_eq!(check_adjacent(Some(&one), &add), Ok(()));
    assert_eq!(check_adjacent(Some(&add), &add), Err(missing(2, Side::Left)));
}

#[test]
fn operator_table() {
    let table = [(Operator::from(UnaryOperator::Plus), Arity::Unary, 0, Associativity::Right, '+'),
                 (Operator::from(UnaryOperator::Neg), Arity::Unary, 0, Associativity::Right, '-'),
                 (Operator::from(BinaryOperator::Mul), Arity::Binary, 1, Associativity::Left, '*'),
                 (Operator::from(BinaryOperator::Add), Arity::Binary, 2, Associativity::Left, '+'),
                 (Operator::from(BinaryOperator::Sub), Arity::Binary, 2, Associativity::Left, '-')];

    for (op, arity, precedence, associativity, symbol) in table {
        assert_eq!(op.arity(), arity, "{op:?}");
        assert_eq!(op.precedence(), precedence, "{op:?}");
        assert_eq!(op.associativity(), associativity, "{op:?}");
        assert_eq!(op.symbol(), symbol, "{op:?}");
    }

    assert_eq!(Arity::Unary.operands(), 1);
    assert_eq!(Arity::Binary.operands(), 2);
}
