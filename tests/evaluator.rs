use rpncalc::{
    Diagnostic, Number, Side,
    config::Limits,
    interpreter::{
        evaluator::{
            binary::eval_binary,
            core::{evaluate_rpn, reduce_rpn},
        },
        lexer::{Token, TokenKind, tokenize},
        operator::{BinaryOperator, Operator, UnaryOperator},
        parser::core::shunting_yard,
    },
};

fn postfix(src: &str) -> Vec<Token> {
    let tokens = tokenize(src, &Limits::default()).unwrap();
    shunting_yard(&tokens).unwrap_or_else(|e| panic!("Failed to convert {src:?}: {e}"))
}

fn eval(src: &str) -> Result<Number, Diagnostic> {
    evaluate_rpn(&postfix(src))
}

const fn lit(n: i64, offset: usize) -> Token {
    Token::literal(Number::Integer(n), offset, 1)
}

const fn op(op: Operator, offset: usize) -> Token {
    Token::new(TokenKind::Operator(op), offset, 1)
}

const ADD: Operator = Operator::Binary(BinaryOperator::Add);
const NEG: Operator = Operator::Unary(UnaryOperator::Neg);

#[test]
fn integer_arithmetic() {
    assert_eq!(eval("1 + 2 + 3 + 4"), Ok(Number::Integer(10)));
    assert_eq!(eval("128 - 64 - 32 - 0"), Ok(Number::Integer(32)));
    assert_eq!(eval("1 * 2 * 4 * 8"), Ok(Number::Integer(64)));
    assert_eq!(eval("10 - (-2) - +2 - (-(-10))"), Ok(Number::Integer(0)));
    assert_eq!(eval("3 * (4 + 2) - ((1 - 5) * 3)"), Ok(Number::Integer(30)));
    assert_eq!(eval("2 - 7"), Ok(Number::Integer(-5)));
}

#[test]
fn reals_are_infectious() {
    assert_eq!(eval("2 * 0.5"), Ok(Number::Real(1.0)));
    assert_eq!(eval("1.5 - 1.5"), Ok(Number::Real(0.0)));
    assert_eq!(eval("-0.25"), Ok(Number::Real(-0.25)));
    assert_eq!(eval("(1 + 2) * 1.0"), Ok(Number::Real(3.0)));
    assert_eq!(eval("0.1 + 0.2"), Ok(Number::Real(0.1 + 0.2)));
}

#[test]
fn real_promotion_avoids_integer_overflow() {
    assert_eq!(eval("9223372036854775807 + 1.0"), Ok(Number::Real(2f64.powi(63))));
}

#[test]
fn integer_overflow_points_at_operator() {
    assert_eq!(eval("9223372036854775807 + 1"), Err(Diagnostic::ArithmeticOverflow { offset: 20 }));
    assert_eq!(eval("4611686018427387904 * 2"), Err(Diagnostic::ArithmeticOverflow { offset: 20 }));
    assert_eq!(eval("-9223372036854775807 - 1"), Ok(Number::Integer(i64::MIN)));
    assert_eq!(eval("-(-9223372036854775807 - 1)"),
               Err(Diagnostic::ArithmeticOverflow { offset: 0 }));
}

#[test]
fn binary_operand_order() {
    let sub = eval_binary(BinaryOperator::Sub, Number::Integer(1), Number::Real(0.5), 0);
    assert_eq!(sub, Ok(Number::Real(0.5)));

    let sub = eval_binary(BinaryOperator::Sub, Number::Real(0.5), Number::Integer(1), 0);
    assert_eq!(sub, Ok(Number::Real(-0.5)));
}

#[test]
fn operator_without_operands() {
    assert_eq!(evaluate_rpn(&[op(ADD, 4)]),
               Err(Diagnostic::OperatorMissingExpr { offset: 4,
                                                     side:   Side::Right, }));
    assert_eq!(evaluate_rpn(&[lit(1, 0), op(ADD, 2)]),
               Err(Diagnostic::OperatorMissingExpr { offset: 2,
                                                     side:   Side::Right, }));
    assert_eq!(evaluate_rpn(&[op(NEG, 0)]),
               Err(Diagnostic::OperatorMissingExpr { offset: 0,
                                                     side:   Side::Right, }));
}

#[test]
fn leftover_values() {
    assert_eq!(evaluate_rpn(&[lit(1, 0), lit(2, 2)]),
               Err(Diagnostic::InvalidLiteralExpr { offset: 0 }));
    assert_eq!(evaluate_rpn(&[lit(1, 0), lit(2, 2), lit(3, 4), op(ADD, 3)]),
               Err(Diagnostic::InvalidLiteralExpr { offset: 0 }));
}

#[test]
fn empty_sequence() {
    assert_eq!(evaluate_rpn(&[]), Err(Diagnostic::EmptyExpression { offset: 0 }));
}

#[test]
fn parentheses_are_rejected() {
    let paren = Token::new(TokenKind::LParen, 3, 1);

    assert_eq!(evaluate_rpn(&[lit(1, 0), paren]), Err(Diagnostic::UnmatchedParen { offset: 3 }));
}

#[test]
fn reduced_token_spans_expression() {
    let src = "(12 + 3) * 4";
    let token = reduce_rpn(&postfix(src)).unwrap();

    assert_eq!(token.value(), Some(Number::Integer(60)));
    assert_eq!(token.text(src), Some("12 + 3) * 4"));

    let src = "  -5 + 2 ";
    let token = reduce_rpn(&postfix(src)).unwrap();

    assert_eq!(token.value(), Some(Number::Integer(-3)));
    assert_eq!(token.text(src), Some("-5 + 2"));
}

#[test]
fn number_accessors() {
    let three = Number::from(3_i64);
    let half = Number::from(0.5);

    assert!(!three.is_real());
    assert!(half.is_real());
    assert_eq!(three.as_integer(), Some(3));
    assert_eq!(half.as_integer(), None);
    assert_eq!(three.as_real(), 3.0);
}
