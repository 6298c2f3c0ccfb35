use crate::{
    error::{Diagnostic, Side},
    interpreter::{
        lexer::{Token, TokenKind},
        operator::{Arity, Associativity, Operator},
        parser::core::ParseResult,
    },
};

/// Checks the first and last token of a sequence.
///
/// A leading operator must be unary and right-associative, so that it has an
/// operand to its right. A trailing operator would need to be unary and
/// left-associative; no operator in the table is, so any trailing operator
/// is missing its right-hand expression.
///
/// # Errors
/// - `EmptyExpression` at offset 0 for an empty sequence.
/// - `OperatorMissingExpr { side: Left }` at a leading binary operator.
/// - `OperatorMissingExpr { side: Right }` at a trailing operator.
pub fn check_bounds(tokens: &[Token]) -> ParseResult<()> {
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Err(Diagnostic::EmptyExpression { offset: 0 });
    };

    if let Some(op) = first.operator()
       && !(op.arity() == Arity::Unary && op.associativity() == Associativity::Right)
    {
        return Err(Diagnostic::OperatorMissingExpr { offset: first.offset,
                                                     side:   Side::Left, });
    }

    if let Some(op) = last.operator()
       && !(op.arity() == Arity::Unary && op.associativity() == Associativity::Left)
    {
        return Err(Diagnostic::OperatorMissingExpr { offset: last.offset,
                                                     side:   Side::Right, });
    }

    Ok(())
}

/// Checks that `current` may directly follow `previous`.
///
/// | previous        | current          | diagnostic                          |
/// |-----------------|------------------|-------------------------------------|
/// | literal         | literal, `(`     | `InvalidLiteralExpr` at previous    |
/// | `)`             | literal, `(`     | `InvalidLiteralExpr` at previous    |
/// | literal, `)`    | unary operator   | `InvalidLiteralExpr` at previous    |
/// | operator, `(`   | binary operator  | `OperatorMissingExpr` left, current |
/// | operator        | `)`              | `OperatorMissingExpr` right, prev.  |
/// | `(`             | `)`              | `EmptyExpression` at current        |
///
/// Tokens produced by the lexer never put a unary operator after a literal
/// or `)`, but hand-built sequences can.
pub fn check_adjacent(previous: Option<&Token>, current: &Token) -> ParseResult<()> {
    let Some(previous) = previous else {
        return Ok(());
    };

    match (previous.kind, current.kind) {
        (TokenKind::Literal(_) | TokenKind::RParen,
         TokenKind::Literal(_) | TokenKind::LParen | TokenKind::Operator(Operator::Unary(_))) => {
            Err(Diagnostic::InvalidLiteralExpr { offset: previous.offset })
        },
        (TokenKind::Operator(_) | TokenKind::LParen, TokenKind::Operator(Operator::Binary(_))) => {
            Err(Diagnostic::OperatorMissingExpr { offset: current.offset,
                                                  side:   Side::Left, })
        },
        (TokenKind::Operator(_), TokenKind::RParen) => {
            Err(Diagnostic::OperatorMissingExpr { offset: previous.offset,
                                                  side:   Side::Right, })
        },
        (TokenKind::LParen, TokenKind::RParen) => {
            Err(Diagnostic::EmptyExpression { offset: current.offset })
        },
        _ => Ok(()),
    }
}
