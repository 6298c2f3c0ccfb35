/// The evaluation pipeline.
///
/// `Context` ties the tokenizer, the converter and the evaluator together
/// under a set of limits and turns diagnostics into user-facing reports.
pub mod context;
/// The evaluator module computes results from postfix token sequences.
///
/// The evaluator walks a postfix sequence with a single value stack, applying
/// each operator to the operands below it. It is the last stage of
/// evaluation.
///
/// # Responsibilities
/// - Applies unary and binary operators with integer/real promotion.
/// - Reports missing operands and integer overflow with operator offsets.
/// - Verifies that exactly one value remains.
pub mod evaluator;
/// The lexer module tokenizes source code for further processing.
///
/// The lexer reads the raw source text and produces tokens for number
/// literals, operators and parentheses, each with its byte offset. This is
/// the first stage of evaluation.
///
/// # Responsibilities
/// - Enforces the input length and token count limits.
/// - Classifies `+` and `-` as unary or binary.
/// - Reports invalid characters with their offset.
pub mod lexer;
/// The operator table.
///
/// Arity, precedence and associativity for every operator, as total
/// functions over an enumeration.
pub mod operator;
/// The parser module converts infix token sequences to postfix order.
///
/// # Responsibilities
/// - Orders operators by precedence and associativity (shunting-yard).
/// - Matches parentheses, reporting the offset of any unmatched one.
/// - Rejects misplaced operators and adjacent operands.
pub mod parser;
/// The value module defines the numeric type produced by evaluation.
pub mod value;
