use tracing::trace;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Position,
        value::number::Number,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two numbers.
    ///
    /// Two integers are combined exactly when the result fits in an `i64`;
    /// a division that is not exact, or an operation that would overflow, is
    /// carried out in `f64` instead. Any real operand makes the whole
    /// operation real. Division is never truncating.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `op` is `Div` and `right` is zero.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     Number, ast::BinaryOperator, interpreter::evaluator::core::Evaluator,
    ///     interpreter::lexer::Position,
    /// };
    ///
    /// let position = Position::default();
    /// let half = Evaluator::eval_binary(BinaryOperator::Div,
    ///                                   Number::Integer(7),
    ///                                   Number::Integer(2),
    ///                                   position);
    /// assert_eq!(half.unwrap(), Number::Real(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Number,
                       right: Number,
                       position: Position)
                       -> EvalResult<Number> {
        if op == BinaryOperator::Div && right.is_zero() {
            return Err(RuntimeError::DivisionByZero { position });
        }

        let result = match (left, right) {
            (Number::Integer(a), Number::Integer(b)) => Self::eval_integer_op(op, a, b),
            _ => Number::Real(Self::eval_real_op(op, left.as_f64(), right.as_f64())),
        };
        trace!(%left, %op, %right, %result, "applied operator");
        Ok(result)
    }

    /// Applies `op` to two integers, falling back to reals when the exact
    /// result is not an `i64`. `b` is non-zero for `Div`.
    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64) -> Number {
        let exact = match op {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Sub => a.checked_sub(b),
            BinaryOperator::Mul => a.checked_mul(b),
            BinaryOperator::Div => match a.checked_rem(b) {
                Some(0) => a.checked_div(b),
                _ => None,
            },
        };
        match exact {
            Some(n) => Number::Integer(n),
            #[allow(clippy::cast_precision_loss)]
            None => Number::Real(Self::eval_real_op(op, a as f64, b as f64)),
        }
    }

    fn eval_real_op(op: BinaryOperator, a: f64, b: f64) -> f64 {
        match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => a / b,
        }
    }
}
