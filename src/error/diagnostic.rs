use std::fmt;

use thiserror::Error;

/// Which operand of an operator is missing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// Nothing usable to the left of the operator.
    Left,
    /// Nothing usable to the right of the operator.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// The kind of a [`Diagnostic`], without its payload.
///
/// Variants are listed in decoding priority order: when a packed
/// [`ErrorCode`](crate::error::ErrorCode) carries more than one kind flag,
/// the one listed first wins.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The token count limit was exceeded.
    MaxTokensExceeded,
    /// The input length limit was exceeded.
    MaxInputExceeded,
    /// A character sequence that is neither an operator, a parenthesis nor a
    /// number literal.
    InvalidToken,
    /// A parenthesis without a partner.
    UnmatchedParen,
    /// An operator lacking an operand on one side.
    OperatorMissingExpr,
    /// A literal or closed group directly followed by another operand.
    InvalidLiteralExpr,
    /// Nothing to evaluate.
    EmptyExpression,
    /// Integer arithmetic left the `i64` range.
    ArithmeticOverflow,
}

impl DiagnosticKind {
    /// All kinds, in decoding priority order.
    pub const PRIORITY: [Self; 8] = [Self::MaxTokensExceeded,
                                     Self::MaxInputExceeded,
                                     Self::InvalidToken,
                                     Self::UnmatchedParen,
                                     Self::OperatorMissingExpr,
                                     Self::InvalidLiteralExpr,
                                     Self::EmptyExpression,
                                     Self::ArithmeticOverflow];

    /// Returns `true` for kinds that carry a source offset.
    #[must_use]
    pub const fn has_offset(self) -> bool {
        !matches!(self, Self::MaxTokensExceeded | Self::MaxInputExceeded)
    }
}

/// Represents every failure an evaluation can end with.
///
/// A diagnostic is created by the stage that detects the problem and ends
/// that stage immediately. Offsets are zero-based byte positions into the
/// evaluated source string.
///
/// The `Display` form is self-contained. Use
/// [`Context::explain`](crate::Context::explain) to include the offending
/// operator or parenthesis in the message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum Diagnostic {
    /// The input string is longer than the configured limit.
    #[error("input is too long")]
    MaxInputExceeded,
    /// The input produced more tokens than the configured limit.
    #[error("input has too many tokens")]
    MaxTokensExceeded,
    /// An unrecognised character sequence.
    #[error("{offset}: invalid token")]
    InvalidToken {
        /// Offset of the first unrecognised byte.
        offset: usize,
    },
    /// A parenthesis that is never closed, or a closing one that was never
    /// opened.
    #[error("{offset}: unmatched parenthesis")]
    UnmatchedParen {
        /// Offset of the unmatched parenthesis.
        offset: usize,
    },
    /// An operator lacking an operand.
    #[error("{offset}: operator missing {side}-hand expression")]
    OperatorMissingExpr {
        /// Offset of the operator.
        offset: usize,
        /// The side the operand is missing from.
        side:   Side,
    },
    /// A literal (or a parenthesised group) that is followed by another
    /// operand instead of an operator or the end of input.
    #[error("{offset}: expected an operator after this expression")]
    InvalidLiteralExpr {
        /// Offset of the literal or closing parenthesis.
        offset: usize,
    },
    /// The input, or a pair of parentheses, contains no expression.
    #[error("{offset}: empty expression")]
    EmptyExpression {
        /// Offset where an expression was expected.
        offset: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("{offset}: integer overflow")]
    ArithmeticOverflow {
        /// Offset of the operator that overflowed.
        offset: usize,
    },
}

impl Diagnostic {
    /// Rebuilds a diagnostic from its parts.
    ///
    /// Missing offsets default to `0` and a missing side to `Side::Left`;
    /// parts a kind does not carry are ignored.
    #[must_use]
    pub fn from_parts(kind: DiagnosticKind, offset: Option<usize>, side: Option<Side>) -> Self {
        let offset = offset.unwrap_or_default();
        match kind {
            DiagnosticKind::MaxInputExceeded => Self::MaxInputExceeded,
            DiagnosticKind::MaxTokensExceeded => Self::MaxTokensExceeded,
            DiagnosticKind::InvalidToken => Self::InvalidToken { offset },
            DiagnosticKind::UnmatchedParen => Self::UnmatchedParen { offset },
            DiagnosticKind::OperatorMissingExpr => {
                Self::OperatorMissingExpr { offset,
                                            side: side.unwrap_or(Side::Left) }
            },
            DiagnosticKind::InvalidLiteralExpr => Self::InvalidLiteralExpr { offset },
            DiagnosticKind::EmptyExpression => Self::EmptyExpression { offset },
            DiagnosticKind::ArithmeticOverflow => Self::ArithmeticOverflow { offset },
        }
    }

    /// The kind of the diagnostic.
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::MaxInputExceeded => DiagnosticKind::MaxInputExceeded,
            Self::MaxTokensExceeded => DiagnosticKind::MaxTokensExceeded,
            Self::InvalidToken { .. } => DiagnosticKind::InvalidToken,
            Self::UnmatchedParen { .. } => DiagnosticKind::UnmatchedParen,
            Self::OperatorMissingExpr { .. } => DiagnosticKind::OperatorMissingExpr,
            Self::InvalidLiteralExpr { .. } => DiagnosticKind::InvalidLiteralExpr,
            Self::EmptyExpression { .. } => DiagnosticKind::EmptyExpression,
            Self::ArithmeticOverflow { .. } => DiagnosticKind::ArithmeticOverflow,
        }
    }

    /// The source offset, for every kind except the two limit kinds.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::MaxInputExceeded | Self::MaxTokensExceeded => None,
            Self::InvalidToken { offset }
            | Self::UnmatchedParen { offset }
            | Self::OperatorMissingExpr { offset, .. }
            | Self::InvalidLiteralExpr { offset }
            | Self::EmptyExpression { offset }
            | Self::ArithmeticOverflow { offset } => Some(*offset),
        }
    }

    /// The missing side, for `OperatorMissingExpr` only.
    #[must_use]
    pub const fn side(&self) -> Option<Side> {
        match self {
            Self::OperatorMissingExpr { side, .. } => Some(*side),
            _ => None,
        }
    }
}
