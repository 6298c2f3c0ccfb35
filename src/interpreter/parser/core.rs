use tracing::trace;

use crate::{
    error::Diagnostic,
    interpreter::{
        lexer::{Token, TokenKind, TokenList},
        operator::{Associativity, Operator},
        parser::placement::{check_adjacent, check_bounds},
    },
};

pub type ParseResult<T> = Result<T, Diagnostic>;

/// Converts an infix token sequence into postfix (Reverse Polish) order.
///
/// This is Dijkstra's shunting-yard algorithm over an explicit operator
/// stack. Parentheses only steer the conversion and never reach the output.
/// Structure is validated on the way: the first and last tokens are checked
/// by [`check_bounds`] and every adjacent pair by [`check_adjacent`], so a
/// sequence that converts successfully always evaluates to exactly one
/// value.
///
/// # Parameters
/// - `tokens`: Disambiguated tokens in source order.
///
/// # Returns
/// The tokens in postfix order, without parentheses.
///
/// # Errors
/// - `UnmatchedParen` at a `)` with no open `(`, or at a `(` that is never
///   closed.
/// - Any diagnostic raised by [`check_bounds`] or [`check_adjacent`].
///
/// No partial output is returned on failure.
///
/// # Example
/// ```
/// use rpncalc::{
///     Diagnostic,
///     config::Limits,
///     interpreter::{
///         lexer::{TokenList, tokenize},
///         parser::core::shunting_yard,
///     },
/// };
///
/// let tokens = tokenize("3 * (4 + 2)", &Limits::default()).unwrap();
/// let postfix = shunting_yard(&tokens).unwrap();
/// assert_eq!(TokenList(&postfix).to_string(), "3 4 2 + *");
///
/// let tokens = tokenize("(1 + 2)) - 5", &Limits::default()).unwrap();
/// assert_eq!(shunting_yard(&tokens), Err(Diagnostic::UnmatchedParen { offset: 7 }));
/// ```
pub fn shunting_yard(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    check_bounds(tokens)?;

    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();
    let mut previous: Option<&Token> = None;

    for token in tokens {
        check_adjacent(previous, token)?;

        match token.kind {
            TokenKind::Literal(_) => output.push(*token),
            TokenKind::LParen => operators.push(*token),
            TokenKind::Operator(op) => {
                while let Some(top) = operators.last().copied()
                      && let Some(top_op) = top.operator()
                      && pops_before(top_op, op)
                {
                    operators.pop();
                    output.push(top);
                }
                operators.push(*token);
            },
            TokenKind::RParen => loop {
                match operators.pop() {
                    Some(Token { kind: TokenKind::LParen,
                                 .. }) => break,
                    Some(top) => output.push(top),
                    None => return Err(Diagnostic::UnmatchedParen { offset: token.offset }),
                }
            },
        }

        previous = Some(token);
    }

    while let Some(top) = operators.pop() {
        if top.is_paren() {
            return Err(Diagnostic::UnmatchedParen { offset: top.offset });
        }
        output.push(top);
    }

    trace!(postfix = %TokenList(&output), "converted to postfix");
    Ok(output)
}

/// Decides whether the operator on top of the stack is emitted before
/// `incoming` is pushed.
///
/// It is when it binds tighter, or binds equally and is left-associative.
/// Equal-precedence right-associative operators stay on the stack, so stacked
/// prefix operators are applied innermost first.
const fn pops_before(top: Operator, incoming: Operator) -> bool {
    top.binds_tighter(incoming)
    || (top.precedence() == incoming.precedence()
        && matches!(top.associativity(), Associativity::Left))
}
