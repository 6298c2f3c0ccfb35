/// Binary operator evaluation.
///
/// Implements addition, subtraction and multiplication with integer/real
/// promotion and checked integer arithmetic.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements unary plus and negation.
pub mod unary;

/// Core evaluation logic.
///
/// Runs the single value stack over a postfix token sequence and validates
/// that exactly one value remains.
pub mod core;
