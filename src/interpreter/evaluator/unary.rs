use crate::{
    error::Diagnostic,
    interpreter::{evaluator::core::EvalResult, operator::UnaryOperator, value::core::Number},
};

/// Applies a unary operator to a value.
///
/// - `Plus`: the identity.
/// - `Neg`: numeric negation. Negating `i64::MIN` overflows.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `operand`: The value to its right.
/// - `offset`: Offset of the operator, for error reporting.
///
/// # Example
/// ```
/// use rpncalc::{
///     Diagnostic, Number,
///     interpreter::{evaluator::unary::eval_unary, operator::UnaryOperator},
/// };
///
/// assert_eq!(eval_unary(UnaryOperator::Neg, Number::Integer(5), 0), Ok(Number::Integer(-5)));
/// assert_eq!(eval_unary(UnaryOperator::Plus, Number::Real(0.5), 0), Ok(Number::Real(0.5)));
/// assert_eq!(eval_unary(UnaryOperator::Neg, Number::Integer(i64::MIN), 3),
///            Err(Diagnostic::ArithmeticOverflow { offset: 3 }));
/// ```
pub fn eval_unary(op: UnaryOperator, operand: Number, offset: usize) -> EvalResult<Number> {
    match op {
        UnaryOperator::Plus => Ok(operand),
        UnaryOperator::Neg => match operand {
            Number::Integer(n) => n.checked_neg()
                                   .map(Number::Integer)
                                   .ok_or(Diagnostic::ArithmeticOverflow { offset }),
            Number::Real(r) => Ok(Number::Real(-r)),
        },
    }
}
