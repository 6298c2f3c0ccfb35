//! # rpncalc
//!
//! rpncalc evaluates arithmetic expressions such as `3 * (4 + 2) - -1`.
//! Input is tokenized, converted to postfix order with the shunting-yard
//! algorithm and evaluated on a value stack. No parse tree is built.
//!
//! Every failure is a [`Diagnostic`] carrying the byte offset of the token it
//! concerns, so a front end can point at the exact operator, parenthesis or
//! character that caused it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Evaluation limits.
///
/// This module declares `Limits`, the input length and token count bounds
/// applied to every evaluation, and their defaults.
pub mod config;
/// Provides the diagnostic type and its encodings.
///
/// This module defines every failure an evaluation can end with, a packed
/// 32-bit encoding for transporting them, and the rendering used to show them
/// to a user.
///
/// # Responsibilities
/// - Defines `Diagnostic` with its kind, offset and side.
/// - Packs and unpacks diagnostics as `ErrorCode`s in a fixed priority order.
/// - Resolves offsets back to tokens for precise messages.
pub mod error;
/// Orchestrates the evaluation of expressions.
///
/// This module ties together lexing, infix to postfix conversion and postfix
/// evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser and the evaluator.
/// - Provides the `Context` entry point.
/// - Defines the operator table and the numeric value type.
pub mod interpreter;

pub use error::{Diagnostic, DiagnosticKind, Side};
pub use interpreter::{context::Context, value::core::Number};

/// Evaluates an arithmetic expression with the default limits.
///
/// # Errors
/// Returns the first diagnostic raised while tokenizing, converting or
/// evaluating `source`.
///
/// # Examples
/// ```
/// use rpncalc::{Diagnostic, Number, Side, evaluate};
///
/// assert_eq!(evaluate("1 + 2 * 3"), Ok(Number::Integer(7)));
/// assert_eq!(evaluate("2 * 0.25"), Ok(Number::Real(0.5)));
///
/// // `*` at offset 4 has nothing on its left.
/// assert_eq!(evaluate("1 + * 2"),
///            Err(Diagnostic::OperatorMissingExpr { offset: 4, side: Side::Left }));
/// ```
pub fn evaluate(source: &str) -> Result<Number, Diagnostic> {
    Context::default().evaluate(source)
}
