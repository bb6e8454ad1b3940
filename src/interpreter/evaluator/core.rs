use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{lexer::Position, value::number::Number},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks an expression tree and computes its value.
///
/// The evaluator holds no state between calls; one instance can evaluate any
/// number of trees.
///
/// # Example
/// ```
/// use reckon::{Number, interpreter::evaluator::core::Evaluator, parse};
///
/// let tree = parse("7 / 2").unwrap();
/// assert_eq!(Evaluator::new().eval(&tree).unwrap(), Number::Real(3.5));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// The tree is walked in post-order with an explicit work stack rather
    /// than by recursion, so its depth is bounded only by memory. Operands
    /// are evaluated left before right, then the operator is applied.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the right operand of a `/` evaluates to
    /// zero anywhere in the tree. The leftmost failing division wins.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Number> {
        let mut tasks = vec![Task::Visit(expr)];
        let mut operands = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(Expr::Literal { value, .. }) => operands.push(Number::Integer(*value)),
                Task::Visit(Expr::BinaryOp { left,
                                             op,
                                             right,
                                             position, }) => {
                    tasks.push(Task::Apply(*op, *position));
                    tasks.push(Task::Visit(right));
                    tasks.push(Task::Visit(left));
                },
                Task::Apply(op, position) => {
                    let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                        unreachable!("every operator is pushed after both of its operands");
                    };
                    operands.push(Self::eval_binary(op, left, right, position)?);
                },
            }
        }

        match operands.pop() {
            Some(value) => Ok(value),
            None => unreachable!("a tree always leaves exactly one value"),
        }
    }
}

/// A pending step of the post-order walk.
enum Task<'a> {
    /// Evaluate a subtree and push its value.
    Visit(&'a Expr),
    /// Pop two values and combine them.
    Apply(BinaryOperator, Position),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: i64) -> Expr {
        Expr::Literal { value,
                        position: Position::default() }
    }

    fn bin(left: Expr, op: BinaryOperator, right: Expr, column: usize) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position: Position::new(1, column) }
    }

    #[test]
    fn literal_evaluates_to_itself() {
        assert_eq!(Evaluator::new().eval(&lit(42)), Ok(Number::Integer(42)));
    }

    #[test]
    fn evaluates_nested_operations() {
        // (10 - 4) * 3 / 9
        let tree = bin(bin(bin(lit(10), BinaryOperator::Sub, lit(4), 0),
                           BinaryOperator::Mul,
                           lit(3),
                           0),
                       BinaryOperator::Div,
                       lit(9),
                       0);
        assert_eq!(Evaluator::new().eval(&tree), Ok(Number::Integer(2)));
    }

    #[test]
    fn division_by_a_zero_subtree_reports_the_operator() {
        // 10 / (5 - 5)
        let tree = bin(lit(10), BinaryOperator::Div, bin(lit(5), BinaryOperator::Sub, lit(5), 9), 4);
        assert_eq!(Evaluator::new().eval(&tree),
                   Err(RuntimeError::DivisionByZero { position: Position::new(1, 4) }));
    }

    #[test]
    fn error_in_left_operand_wins() {
        // (1 / 0) / 0
        let tree = bin(bin(lit(1), BinaryOperator::Div, lit(0), 3), BinaryOperator::Div, lit(0), 8);
        assert_eq!(Evaluator::new().eval(&tree),
                   Err(RuntimeError::DivisionByZero { position: Position::new(1, 3) }));
    }

    #[test]
    fn deep_trees_evaluate_without_recursion() {
        let left_deep = (0..200_000).fold(lit(1), |acc, _| bin(acc, BinaryOperator::Add, lit(1), 0));
        assert_eq!(Evaluator::new().eval(&left_deep), Ok(Number::Integer(200_001)));

        let right_deep = (0..200_000).fold(lit(0), |acc, _| bin(lit(2), BinaryOperator::Sub, acc, 0));
        assert_eq!(Evaluator::new().eval(&right_deep), Ok(Number::Integer(0)));
    }

    #[test]
    fn reals_propagate_through_later_operations() {
        // 7 / 2 * 2
        let tree = bin(bin(lit(7), BinaryOperator::Div, lit(2), 0), BinaryOperator::Mul, lit(2), 0);
        assert_eq!(Evaluator::new().eval(&tree), Ok(Number::Real(7.0)));
    }
}
