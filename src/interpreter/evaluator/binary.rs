use crate::{
    error::Diagnostic,
    interpreter::{evaluator::core::EvalResult, operator::BinaryOperator, value::core::Number},
};

/// Applies a binary operator to two values.
///
/// Two integers produce an integer, using checked arithmetic. If either
/// operand is real, both are promoted and the result is real.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Offset of the operator, for error reporting.
///
/// # Returns
/// The computed number, or `ArithmeticOverflow` if integer arithmetic leaves
/// the `i64` range.
///
/// # Example
/// ```
/// use rpncalc::{
///     Number,
///     interpreter::{evaluator::binary::eval_binary, operator::BinaryOperator},
/// };
///
/// let sum = eval_binary(BinaryOperator::Sub, Number::Integer(10), Number::Integer(4), 3);
/// assert_eq!(sum, Ok(Number::Integer(6)));
///
/// let product = eval_binary(BinaryOperator::Mul, Number::Integer(3), Number::Real(0.5), 2);
/// assert_eq!(product, Ok(Number::Real(1.5)));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   offset: usize)
                   -> EvalResult<Number> {
    use BinaryOperator::{Add, Mul, Sub};
    use Number::{Integer, Real};

    match (left, right) {
        (Integer(l), Integer(r)) => {
            let value = match op {
                Add => l.checked_add(r),
                Sub => l.checked_sub(r),
                Mul => l.checked_mul(r),
            };
            value.map(Integer)
                 .ok_or(Diagnostic::ArithmeticOverflow { offset })
        },
        _ => {
            let (l, r) = (left.as_real(), right.as_real());
            Ok(Real(match op {
                        Add => l + r,
                        Sub => l - r,
                        Mul => l * r,
                    }))
        },
    }
}
