use std::{fmt, ops::Range};

use logos::Logos;
use tracing::debug;

use crate::{
    config::Limits,
    error::Diagnostic,
    interpreter::{
        operator::{BinaryOperator, Operator, UnaryOperator},
        value::core::Number,
    },
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, Diagnostic>;

/// A raw lexical unit, before `+` and `-` are classified as unary or binary.
///
/// This enum is the scanner's alphabet; [`tokenize`] turns a sequence of
/// lexemes into [`Token`]s.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// Real literal tokens, such as `3.14` or `2.0`.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace between tokens.
    #[regex(r"[ \t\n\r\x0B\x0C]+", logos::skip)]
    Ignored,
}

/// Parses a real literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid real.
fn parse_real(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the slice does not fit in an `i64`, which the lexer reports
///   as an invalid token.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// What a token is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A number literal, or a value computed by the evaluator.
    Literal(Number),
    /// A unary or binary operator.
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// Represents one lexical unit of the source string.
///
/// `offset` and `len` are byte positions, so
/// `&source[token.offset..token.offset + token.len]` is the token's text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// Byte offset of the token's first character.
    pub offset: usize,
    /// Length of the token's text in bytes.
    pub len:    usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, offset: usize, len: usize) -> Self {
        Self { kind,
               offset,
               len }
    }

    /// Creates a literal token.
    #[must_use]
    pub const fn literal(value: Number, offset: usize, len: usize) -> Self {
        Self::new(TokenKind::Literal(value), offset, len)
    }

    /// Byte offset one past the token's last character.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The literal's value, if this is a literal.
    #[must_use]
    pub const fn value(&self) -> Option<Number> {
        match self.kind {
            TokenKind::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// The operator, if this is an operator.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Returns `true` for literals.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::Literal(_))
    }

    /// Returns `true` for operators of either arity.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::Operator(_))
    }

    /// Returns `true` for `(` and `)`.
    #[must_use]
    pub const fn is_paren(&self) -> bool {
        matches!(self.kind, TokenKind::LParen | TokenKind::RParen)
    }

    /// The token's text within `source`, if the span lies inside it.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.offset..self.end())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Literal(value) => write!(f, "{value}"),
            TokenKind::Operator(op) => write!(f, "{op}"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
        }
    }
}

/// Displays a token sequence separated by spaces, e.g. `1 2 3 * +`.
#[derive(Debug, Clone, Copy)]
pub struct TokenList<'a>(pub &'a [Token]);

impl fmt::Display for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Splits a source string into tokens.
///
/// Whitespace between tokens is skipped. Each `+` and `-` is then classified
/// as unary or binary by [`disambiguate`].
///
/// # Errors
/// - `MaxInputExceeded` if `source` is longer than `limits.max_input` bytes.
/// - `InvalidToken` at the offset of the first character that does not start
///   an operator, a parenthesis or a number literal, or at the start of an
///   integer literal too large for `i64`.
/// - `MaxTokensExceeded` once more than `limits.max_tokens` tokens are
///   produced.
///
/// # Example
/// ```
/// use rpncalc::{
///     Diagnostic,
///     config::Limits,
///     interpreter::lexer::{TokenList, tokenize},
/// };
///
/// let tokens = tokenize("-1 + 2.5", &Limits::default()).unwrap();
/// assert_eq!(TokenList(&tokens).to_string(), "- 1 + 2.5");
/// assert_eq!(tokens[3].offset, 5);
///
/// let err = tokenize("  32 * abc", &Limits::default()).unwrap_err();
/// assert_eq!(err, Diagnostic::InvalidToken { offset: 7 });
/// ```
pub fn tokenize(source: &str, limits: &Limits) -> LexResult<Vec<Token>> {
    if source.len() > limits.max_input {
        return Err(Diagnostic::MaxInputExceeded);
    }

    let mut scanned = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let Ok(lexeme) = lexeme else {
            debug!(offset = span.start, slice = lexer.slice(), "invalid token");
            return Err(Diagnostic::InvalidToken { offset: span.start });
        };

        scanned.push((lexeme, span));
        if scanned.len() > limits.max_tokens {
            return Err(Diagnostic::MaxTokensExceeded);
        }
    }

    Ok(disambiguate(scanned))
}

/// Turns scanned lexemes into tokens, classifying `+` and `-`.
///
/// A sign is unary when it is the first token, or when the token before it
/// is a binary operator or `(`. Otherwise it is binary. Each decision looks
/// only at tokens already emitted, so one pass suffices.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{
///     lexer::{Lexeme, TokenKind, disambiguate},
///     operator::{BinaryOperator, Operator, UnaryOperator},
/// };
///
/// let tokens = disambiguate(vec![(Lexeme::Minus, 0..1),
///                                (Lexeme::Integer(1), 1..2),
///                                (Lexeme::Minus, 2..3),
///                                (Lexeme::Integer(2), 3..4)]);
///
/// assert_eq!(tokens[0].kind, TokenKind::Operator(Operator::Unary(UnaryOperator::Neg)));
/// assert_eq!(tokens[2].kind, TokenKind::Operator(Operator::Binary(BinaryOperator::Sub)));
/// ```
#[must_use]
pub fn disambiguate(scanned: Vec<(Lexeme, Range<usize>)>) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(scanned.len());

    for (lexeme, span) in scanned {
        let kind = match lexeme {
            Lexeme::Real(r) => TokenKind::Literal(Number::Real(r)),
            Lexeme::Integer(n) => TokenKind::Literal(Number::Integer(n)),
            Lexeme::Plus => sign(tokens.last(), UnaryOperator::Plus, BinaryOperator::Add),
            Lexeme::Minus => sign(tokens.last(), UnaryOperator::Neg, BinaryOperator::Sub),
            Lexeme::Star => TokenKind::Operator(Operator::Binary(BinaryOperator::Mul)),
            Lexeme::LParen => TokenKind::LParen,
            Lexeme::RParen => TokenKind::RParen,
            Lexeme::Ignored => continue,
        };
        tokens.push(Token::new(kind, span.start, span.len()));
    }

    tokens
}

/// Classifies a sign given the token emitted before it.
fn sign(previous: Option<&Token>, unary: UnaryOperator, binary: BinaryOperator) -> TokenKind {
    if matches!(previous.map(|token| token.kind),
                None | Some(TokenKind::LParen | TokenKind::Operator(Operator::Binary(_))))
    {
        TokenKind::Operator(Operator::Unary(unary))
    } else {
        TokenKind::Operator(Operator::Binary(binary))
    }
}
