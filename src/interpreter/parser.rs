/// Infix to postfix conversion.
///
/// Implements the shunting-yard algorithm, turning the lexer's token
/// sequence into Reverse Polish order using an explicit operator stack.
pub mod core;

/// Structural validation.
///
/// Checks operand placement around operators and parentheses so malformed
/// input is rejected with a precise offset before evaluation starts.
pub mod placement;
