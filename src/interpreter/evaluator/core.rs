use tracing::trace;

use crate::{
    error::{Diagnostic, Side},
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        lexer::{Token, TokenKind},
        operator::Operator,
        value::core::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// `Diagnostic` describing the failure.
pub type EvalResult<T> = Result<T, Diagnostic>;

/// A value on the evaluation stack, with the source span it was computed
/// from.
#[derive(Debug, Clone, Copy)]
struct Operand {
    value: Number,
    start: usize,
    end:   usize,
}

impl From<Operand> for Token {
    fn from(operand: Operand) -> Self {
        Self::literal(operand.value, operand.start, operand.end - operand.start)
    }
}

/// Evaluates a postfix token sequence to a single number.
///
/// # Example
/// ```
/// use rpncalc::{
///     Number,
///     config::Limits,
///     interpreter::{evaluator::core::evaluate_rpn, lexer::tokenize, parser::core::shunting_yard},
/// };
///
/// let tokens = tokenize("10 - (-2) - +2 - (-(-10))", &Limits::default()).unwrap();
/// let postfix = shunting_yard(&tokens).unwrap();
///
/// assert_eq!(evaluate_rpn(&postfix), Ok(Number::Integer(0)));
/// ```
pub fn evaluate_rpn(postfix: &[Token]) -> EvalResult<Number> {
    reduce(postfix).map(|operand| operand.value)
}

/// Evaluates a postfix token sequence to a single literal token.
///
/// The returned token spans the source text of the whole expression,
/// excluding any outer parentheses.
///
/// # Errors
/// See [`evaluate_rpn`]. Both functions share the same checks.
pub fn reduce_rpn(postfix: &[Token]) -> EvalResult<Token> {
    reduce(postfix).map(Token::from)
}

/// Runs the value stack over `postfix`.
///
/// Literals are pushed. A unary operator pops one operand, a binary operator
/// pops the right operand and then the left one; the result is pushed back.
/// The sequence is validated independently of the converter that produced
/// it.
///
/// # Errors
/// - `OperatorMissingExpr { side: Right }` when an operator finds fewer
///   operands than its arity.
/// - `ArithmeticOverflow` from integer arithmetic.
/// - `UnmatchedParen` if a parenthesis is present.
/// - `EmptyExpression` at offset 0 if nothing remains on the stack.
/// - `InvalidLiteralExpr` at the first unconsumed value if more than one
///   remains.
fn reduce(postfix: &[Token]) -> EvalResult<Operand> {
    let mut stack: Vec<Operand> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token.kind {
            TokenKind::Literal(value) => stack.push(Operand { value,
                                                              start: token.offset,
                                                              end: token.end() }),
            TokenKind::Operator(Operator::Unary(op)) => {
                let operand = stack.pop().ok_or(missing_right(token))?;
                let value = eval_unary(op, operand.value, token.offset)?;
                stack.push(Operand { value,
                                     start: token.offset,
                                     end: operand.end.max(token.end()) });
            },
            TokenKind::Operator(Operator::Binary(op)) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(missing_right(token));
                };
                let value = eval_binary(op, left.value, right.value, token.offset)?;
                stack.push(Operand { value,
                                     start: left.start.min(token.offset),
                                     end: right.end.max(token.end()) });
            },
            TokenKind::LParen | TokenKind::RParen => {
                return Err(Diagnostic::UnmatchedParen { offset: token.offset });
            },
        }
    }

    match stack.as_slice() {
        [result] => {
            trace!(result = %result.value, "evaluated postfix");
            Ok(*result)
        },
        [] => Err(Diagnostic::EmptyExpression { offset: 0 }),
        [first, ..] => Err(Diagnostic::InvalidLiteralExpr { offset: first.start }),
    }
}

const fn missing_right(operator: &Token) -> Diagnostic {
    Diagnostic::OperatorMissingExpr { offset: operator.offset,
                                      side:   Side::Right, }
}
