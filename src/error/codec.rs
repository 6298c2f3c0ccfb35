use std::fmt;

use thiserror::Error;

use crate::{
    error::diagnostic::{Diagnostic, DiagnosticKind, Side},
    interpreter::lexer::Token,
};

/// A diagnostic packed into a single 32-bit value.
///
/// ```text
/// +----+-------------------------+------+----------------------+
/// | 31 | 30          ...      23 |  22  | 21       ...      00 |
/// +----+-------------------------+------+----------------------+
/// |  1 |     one flag per kind   | side |        offset        |
/// +----+-------------------------+------+----------------------+
/// ```
///
/// Kind flags, from bit 30 down: `MaxTokensExceeded`, `MaxInputExceeded`,
/// `InvalidToken`, `UnmatchedParen`, `OperatorMissingExpr`,
/// `InvalidLiteralExpr`, `EmptyExpression`, `ArithmeticOverflow`. The side
/// bit is `1` for a missing right-hand expression.
///
/// # Example
/// ```
/// use rpncalc::{Diagnostic, Side, error::ErrorCode};
///
/// let diagnostic = Diagnostic::OperatorMissingExpr { offset: 5, side: Side::Right };
/// let code = ErrorCode::try_from(diagnostic).unwrap();
///
/// assert_eq!(code.raw(), 0x8440_0005);
/// assert_eq!(Diagnostic::try_from(code).unwrap(), diagnostic);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode(u32);

/// Failures while packing or unpacking an [`ErrorCode`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The diagnostic's offset does not fit in the offset field.
    #[error("offset {offset} does not fit in {} bits", ErrorCode::OFFSET_BITS)]
    OffsetOverflow {
        /// The offending offset.
        offset: usize,
    },
    /// The marker bit is not set.
    #[error("{0:#010x} is not a diagnostic code")]
    NotADiagnostic(u32),
    /// The marker bit is set but no kind flag is.
    #[error("{0:#010x} carries no diagnostic kind")]
    UnknownKind(u32),
}

impl ErrorCode {
    /// Set in every valid code.
    pub const MARKER: u32 = 1 << 31;
    /// Width of the offset field.
    pub const OFFSET_BITS: u32 = 22;
    /// Largest offset that can be packed.
    pub const MAX_OFFSET: usize = (1 << Self::OFFSET_BITS) - 1;

    const SIDE: u32 = 1 << Self::OFFSET_BITS;
    const OFFSET_MASK: u32 = Self::SIDE - 1;

    /// Wraps a raw value without validating it.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The packed value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The flag bit reserved for `kind`.
    #[must_use]
    pub const fn flag(kind: DiagnosticKind) -> u32 {
        match kind {
            DiagnosticKind::MaxTokensExceeded => 1 << 30,
            DiagnosticKind::MaxInputExceeded => 1 << 29,
            DiagnosticKind::InvalidToken => 1 << 28,
            DiagnosticKind::UnmatchedParen => 1 << 27,
            DiagnosticKind::OperatorMissingExpr => 1 << 26,
            DiagnosticKind::InvalidLiteralExpr => 1 << 25,
            DiagnosticKind::EmptyExpression => 1 << 24,
            DiagnosticKind::ArithmeticOverflow => 1 << 23,
        }
    }

    /// Reads the kind, checking flags in priority order.
    ///
    /// The first set flag wins, so a code carrying several flags decodes to
    /// the most specific limit or lexical kind before any structural one.
    fn kind(self) -> Option<DiagnosticKind> {
        DiagnosticKind::PRIORITY.into_iter()
                                .find(|&kind| self.0 & Self::flag(kind) != 0)
    }
}

impl TryFrom<Diagnostic> for ErrorCode {
    type Error = CodecError;

    fn try_from(diagnostic: Diagnostic) -> Result<Self, Self::Error> {
        let mut raw = Self::MARKER | Self::flag(diagnostic.kind());

        if let Some(offset) = diagnostic.offset() {
            if offset > Self::MAX_OFFSET {
                return Err(CodecError::OffsetOverflow { offset });
            }
            // Bounded by MAX_OFFSET above.
            #[allow(clippy::cast_possible_truncation)]
            {
                raw |= offset as u32;
            }
        }
        if diagnostic.side() == Some(Side::Right) {
            raw |= Self::SIDE;
        }

        Ok(Self(raw))
    }
}

impl TryFrom<ErrorCode> for Diagnostic {
    type Error = CodecError;

    fn try_from(code: ErrorCode) -> Result<Self, Self::Error> {
        if code.0 & ErrorCode::MARKER == 0 {
            return Err(CodecError::NotADiagnostic(code.0));
        }
        let kind = code.kind().ok_or(CodecError::UnknownKind(code.0))?;

        let offset = (code.0 & ErrorCode::OFFSET_MASK) as usize;
        let side = if code.0 & ErrorCode::SIDE == 0 { Side::Left } else { Side::Right };

        Ok(Self::from_parts(kind, kind.has_offset().then_some(offset), Some(side)))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Finds the token that starts at `offset`.
///
/// Diagnostics only carry offsets; this maps one back to the operator,
/// parenthesis or literal it was raised for.
///
/// # Example
/// ```
/// use rpncalc::{config::Limits, error::resolve_token, interpreter::lexer::tokenize};
///
/// let source = "1 + (2";
/// let tokens = tokenize(source, &Limits::default()).unwrap();
///
/// let token = resolve_token(&tokens, 4).unwrap();
/// assert_eq!(token.text(source), Some("("));
/// assert!(resolve_token(&tokens, 3).is_none());
/// ```
#[must_use]
pub fn resolve_token(tokens: &[Token], offset: usize) -> Option<&Token> {
    tokens.iter().find(|token| token.offset == offset)
}
