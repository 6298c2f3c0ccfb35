use std::fmt;

use crate::{config::Limits, error::diagnostic::Diagnostic};

/// A diagnostic paired with what is needed to describe it to a user.
///
/// Created by [`Context::explain`](crate::Context::explain). `symbol` is the
/// source text of the token the diagnostic points at, when one could be
/// resolved.
///
/// # Example
/// ```
/// use rpncalc::Context;
///
/// let context = Context::default();
/// let source = "(1 + 2";
/// let diagnostic = context.evaluate(source).unwrap_err();
///
/// assert_eq!(context.explain(source, diagnostic).to_string(), "0: unmatched \"(\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report<'a> {
    /// The reported diagnostic.
    pub diagnostic: Diagnostic,
    /// Source text of the token at the diagnostic's offset.
    pub symbol:     Option<&'a str>,
    /// Limits in force when the diagnostic was raised.
    pub limits:     Limits,
}

impl Report<'_> {
    /// Width of the marked region in characters, at least one.
    #[must_use]
    pub fn width(&self) -> usize {
        self.symbol.map_or(1, |symbol| symbol.chars().count().max(1))
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.diagnostic, self.symbol) {
            (Diagnostic::MaxInputExceeded, _) => {
                write!(f,
                       "input string is too long; a maximum of {} bytes is accepted",
                       self.limits.max_input)
            },
            (Diagnostic::MaxTokensExceeded, _) => {
                write!(f,
                       "input string is too long; a maximum of {} tokens is accepted",
                       self.limits.max_tokens)
            },
            (Diagnostic::UnmatchedParen { offset }, Some(symbol)) => {
                write!(f, "{offset}: unmatched \"{symbol}\"")
            },
            (Diagnostic::OperatorMissingExpr { offset, side }, Some(symbol)) => {
                write!(f, "{offset}: operator \"{symbol}\" missing {side}-hand expression")
            },
            (Diagnostic::InvalidLiteralExpr { offset }, Some(symbol)) => {
                write!(f, "{offset}: expected an operator after \"{symbol}\"")
            },
            (Diagnostic::ArithmeticOverflow { offset }, Some(symbol)) => {
                write!(f, "{offset}: integer overflow in operator \"{symbol}\"")
            },
            (diagnostic, _) => write!(f, "{diagnostic}"),
        }
    }
}
